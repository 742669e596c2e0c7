//! Human-readable descriptions of every opcode.

use crate::core::{Branch, Direction};

const MIRROR: &str = "Mirror: reflects the instruction pointer according to its current direction.";

const DIGIT: &str = "Multiplies the current memory edge by 10 and adds the digit, or subtracts it \
    when the edge is negative, so multi-digit literals build up one digit at a time.";

/// Fixed descriptions, one per opcode with dedicated behavior.
const OPCODE_DOCS: &[(char, &str)] = &[
    ('.', "No-op: the instruction pointer passes straight through."),
    ('@', "Terminates the program."),
    (')', "Increments the current memory edge."),
    ('(', "Decrements the current memory edge."),
    ('+', "Sets the current memory edge to left + right."),
    ('-', "Sets the current memory edge to left - right."),
    ('*', "Sets the current memory edge to left * right."),
    (':', "Sets the current memory edge to left / right, rounded towards negative infinity. \
        Stops the program when right is zero."),
    ('%', "Sets the current memory edge to left modulo right; the result has the sign of right. \
        Stops the program when right is zero."),
    ('~', "Negates the current memory edge."),
    (',', "Reads one byte of input into the current memory edge, or -1 at end of input."),
    ('?', "Skips input up to a digit, + or -, then reads a signed decimal integer into the current \
        memory edge. The byte after the number is left unread. Yields 0 at end of input."),
    (';', "Writes the current memory edge modulo 256 as one output byte."),
    ('!', "Writes the decimal representation of the current memory edge."),
    ('$', "Jump: the instruction pointer skips the next cell in its direction."),
    ('[', "Switches to the previous instruction pointer (5 after 0) once the current one has moved."),
    (']', "Switches to the next instruction pointer (0 after 5) once the current one has moved."),
    ('#', "Switches to the instruction pointer numbered by the current memory edge modulo 6 once \
        the current one has moved."),
    ('{', "Moves the memory pointer to the left neighbour."),
    ('}', "Moves the memory pointer to the right neighbour."),
    ('"', "Moves the memory pointer backwards and to the left, the same as =}=."),
    ('\'', "Moves the memory pointer backwards and to the right, the same as ={=."),
    ('=', "Reverses the memory pointer. The current edge is unchanged but left and right swap sides."),
    ('^', "Moves the memory pointer right if the current edge is positive, left otherwise."),
    ('&', "Copies the right neighbour into the current edge if it is positive, the left neighbour otherwise."),
];

/// Describe what `opcode` does when executed.
pub fn describe(opcode: char) -> String {
    if let Some((_, text)) = OPCODE_DOCS.iter().find(|(op, _)| *op == opcode) {
        return (*text).to_string();
    }
    match opcode {
        '_' | '|' | '/' | '\\' => MIRROR.to_string(),
        '<' => branch_description(Branch::LessThan, Direction::E),
        '>' => branch_description(Branch::GreaterThan, Direction::W),
        '0'..='9' => DIGIT.to_string(),
        other => format!("Sets the current memory edge to the code point of {other:?}: {}.", u32::from(other)),
    }
}

fn branch_description(branch: Branch, example: Direction) -> String {
    let symbol = match branch {
        Branch::LessThan => '<',
        Branch::GreaterThan => '>',
    };
    format!(
        "Branch or mirror depending on the direction of travel. When the current memory edge is positive \
         the instruction pointer turns 60 degrees right ({symbol} turns {example} into {}); otherwise it turns \
         60 degrees left ({symbol} turns {example} into {}).",
        example.reflect_branch(branch, true),
        example.reflect_branch(branch, false),
    )
}
