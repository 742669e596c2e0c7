//! Execution state and the stepping algorithm.
//!
//! One call to [`ExecutionState::step`] executes exactly one opcode with the
//! active IP, moves that IP (wrapping at the edges), switches the active IP
//! if the opcode asked for it, and increments the tick counter.
//!
//! # Step order
//!
//! 1. A terminated state ignores further steps.
//! 2. In reverse mode the IP turns around and moves before executing.
//! 3. The opcode under the IP is executed.
//! 4. `@` and division by zero stop here. The IP keeps the position and
//!    direction it had before the step, even in reverse mode.
//! 5. The IP moves one cell (two after `$`), or turns back in reverse mode.
//! 6. `]`, `[`, and `#` take effect.

use tracing::{debug, trace};

use crate::core::value::{floor_div, floor_mod, is_positive, push_digit, to_ip_index, to_output_byte};
use crate::core::{to_index, AxialPoint, Direction, HexResult, HexagonyError, Memory, Mirror, Branch, TerminationReason, Value};
use crate::core::geometry::index_of;

use super::context::ExecutionContext;
use super::ip::{initial_ips, InstructionPointer, IP_COUNT};
use super::topology::{advance, EdgeTraversal};

/// What the IP does after an opcode executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Move one cell.
    Next,
    /// Move two cells (`$`).
    Skip,
    /// Move one cell, then hand control to another IP.
    Switch(usize),
    /// Stop in place.
    Halt(TerminationReason),
}

/// Complete mutable state of a running program.
#[derive(Debug, Clone)]
pub struct ExecutionState {
    pub memory: Memory,
    pub ips: [InstructionPointer; IP_COUNT],
    pub active_ip: usize,
    pub ticks: u64,
    pub output: Vec<u8>,
    /// Index of the next unread input byte.
    pub input_position: usize,
    pub termination_reason: Option<TerminationReason>,
    /// Edge crossings made during the most recent step, in order.
    pub edge_traversals: Vec<EdgeTraversal>,
    size: usize,
}

impl ExecutionState {
    /// Fresh state for a hexagon of edge length `size`.
    pub fn new(size: usize) -> Self {
        Self {
            memory: Memory::new(),
            ips: initial_ips(size),
            active_ip: 0,
            ticks: 0,
            output: Vec::new(),
            input_position: 0,
            termination_reason: None,
            edge_traversals: Vec::new(),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_terminated(&self) -> bool {
        self.termination_reason.is_some()
    }

    pub fn active(&self) -> &InstructionPointer {
        &self.ips[self.active_ip]
    }

    /// Execute one tick.
    pub fn step(&mut self, context: &ExecutionContext) -> HexResult<()> {
        if self.is_terminated() {
            return Ok(());
        }
        if context.size() != self.size {
            return Err(HexagonyError::SizeMismatch { expected: self.size, found: context.size() });
        }

        self.edge_traversals.clear();
        let active = self.active_ip;
        let mut coords = self.ips[active].coords;
        let mut dir = self.ips[active].dir;

        if context.reverse {
            dir = dir.reverse();
            coords = self.advance_from(coords, dir);
        }

        let (i, j) = to_index(self.size, coords)?;
        let opcode = context.instruction(i, j).ok_or(HexagonyError::OutOfBounds {
            q: coords.q,
            r: coords.r,
            size: self.size,
        })?;
        self.ips[active].mark_executed(i, j);

        trace!(tick = self.ticks, ip = active, %coords, %dir, %opcode, "execute");
        if context.is_debug(i, j) {
            debug!(
                tick = self.ticks,
                ip = active,
                %coords,
                %dir,
                memory = ?self.memory,
                "debug cell"
            );
        }

        let flow = self.execute(opcode, &mut dir, context);

        if context.reverse {
            dir = dir.reverse();
        }

        // A halted IP keeps its position and direction from before the step.
        if let Flow::Halt(reason) = flow {
            debug!(tick = self.ticks, ip = active, %coords, reason = %reason, "program stopped");
            self.termination_reason = Some(reason);
            self.ticks += 1;
            return Ok(());
        }

        if !context.reverse {
            coords = self.advance_from(coords, dir);
            if flow == Flow::Skip {
                coords = self.advance_from(coords, dir);
            }
        }

        let ip = &mut self.ips[active];
        ip.coords = coords;
        ip.dir = dir;
        let (i, j) = index_of(self.size, coords);
        ip.record_position(i, j);

        if let Flow::Switch(next) = flow {
            if next != active {
                debug!(tick = self.ticks, from = active, to = next, "switch instruction pointer");
            }
            self.active_ip = next;
        }

        self.ticks += 1;
        Ok(())
    }

    /// One cell from `coords` in `dir`, wrapping at the edges and recording
    /// any crossing.
    fn advance_from(&mut self, coords: AxialPoint, dir: Direction) -> AxialPoint {
        let positive = is_positive(&self.memory.value());
        let movement = advance(self.size, coords, dir, positive);
        if let Some(edge) = movement.edge_traversal {
            debug!(edge = %edge, branch = edge.is_branch(), "edge traversal");
            self.edge_traversals.push(edge);
        }
        movement.coords
    }

    fn execute(&mut self, opcode: char, dir: &mut Direction, context: &ExecutionContext) -> Flow {
        let memory = &mut self.memory;

        match opcode {
            '.' => {}
            '@' => return Flow::Halt(TerminationReason::Terminated),

            // Arithmetic
            ')' => memory.set_value(memory.value() + 1),
            '(' => memory.set_value(memory.value() - 1),
            '+' => memory.set_value(memory.left() + memory.right()),
            '-' => memory.set_value(memory.left() - memory.right()),
            '*' => memory.set_value(memory.left() * memory.right()),
            '~' => memory.set_value(-memory.value()),
            ':' | '%' => {
                let (left, right) = (memory.left(), memory.right());
                let result = if opcode == ':' {
                    floor_div(&left, &right)
                } else {
                    floor_mod(&left, &right)
                };
                match result {
                    Some(value) => memory.set_value(value),
                    None if context.speculative => {}
                    None => return Flow::Halt(TerminationReason::DivisionByZero),
                }
            }

            // Memory pointer
            '{' => memory.move_left(),
            '}' => memory.move_right(),
            '=' => memory.reverse(),
            '"' => memory.move_back_left(),
            '\'' => memory.move_back_right(),
            '^' => {
                if is_positive(&memory.value()) {
                    memory.move_right();
                } else {
                    memory.move_left();
                }
            }
            '&' => {
                let copied = if is_positive(&memory.value()) { memory.right() } else { memory.left() };
                memory.set_value(copied);
            }

            // I/O
            ',' => {
                let mut reader = context.reader(self.input_position);
                let value = reader.read_byte().map_or_else(|| Value::from(-1), Value::from);
                self.input_position = reader.position();
                memory.set_value(value);
            }
            '?' => {
                let mut reader = context.reader(self.input_position);
                let value = reader.parse_integer();
                self.input_position = reader.position();
                memory.set_value(value);
            }
            ';' => self.output.push(to_output_byte(&memory.value())),
            '!' => self.output.extend_from_slice(memory.value().to_string().as_bytes()),

            // Control flow
            '_' | '|' | '/' | '\\' => {
                if let Some(mirror) = Mirror::from_opcode(opcode) {
                    *dir = dir.reflect(mirror);
                }
            }
            '<' | '>' => {
                if let Some(branch) = Branch::from_opcode(opcode) {
                    let positive = is_positive(&memory.value());
                    *dir = dir.reflect_branch(branch, positive);
                }
            }
            '$' if !context.reverse => return Flow::Skip,
            '$' => {}
            ']' | '[' | '#' if context.speculative => {}
            ']' => return Flow::Switch((self.active_ip + 1) % IP_COUNT),
            '[' => return Flow::Switch((self.active_ip + IP_COUNT - 1) % IP_COUNT),
            '#' => return Flow::Switch(to_ip_index(&memory.value())),

            '0'..='9' => {
                let digit = opcode.to_digit(10).unwrap_or_default();
                memory.set_value(push_digit(&memory.value(), digit));
            }
            other => memory.set_value(Value::from(u32::from(other))),
        }

        Flow::Next
    }
}
