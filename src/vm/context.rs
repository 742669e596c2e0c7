//! Execution context: everything a step reads but never writes.
//!
//! The context holds the current source grid, the input bytes, and the mode
//! flags. It lives apart from the execution state so that the source or the
//! input can be replaced between steps without disturbing a running program,
//! as long as the hexagon size stays the same.

use tracing::debug;

use crate::core::{HexResult, HexagonyError, Value};
use crate::source::SourceGrid;

/// Read-only configuration for one or more steps.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    grid: SourceGrid,
    input: Vec<u8>,
    /// Step backwards: move first, execute, and skip `$`.
    pub reverse: bool,
    /// Look-ahead mode: never halt on division by zero, never switch IPs.
    pub speculative: bool,
}

impl ExecutionContext {
    pub fn new(grid: SourceGrid, input: impl Into<Vec<u8>>) -> Self {
        Self {
            grid,
            input: input.into(),
            reverse: false,
            speculative: false,
        }
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_speculative(mut self, speculative: bool) -> Self {
        self.speculative = speculative;
        self
    }

    /// Edge length of the hexagon.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &SourceGrid {
        &self.grid
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Swap in a new grid of the same size.
    pub fn set_source_code(&mut self, grid: SourceGrid) -> HexResult<()> {
        if grid.size() != self.grid.size() {
            return Err(HexagonyError::SizeMismatch {
                expected: self.grid.size(),
                found: grid.size(),
            });
        }
        debug!(size = grid.size(), "source code replaced");
        self.grid = grid;
        Ok(())
    }

    /// Replace the input. Positions already consumed stay consumed.
    pub fn set_input(&mut self, input: impl Into<Vec<u8>>) {
        self.input = input.into();
    }

    /// Opcode at grid indices.
    pub fn instruction(&self, i: usize, j: usize) -> Option<char> {
        self.grid.get(i, j)
    }

    pub fn is_debug(&self, i: usize, j: usize) -> bool {
        self.grid.is_debug(i, j)
    }

    /// A reader positioned at `position`.
    pub fn reader(&self, position: usize) -> InputReader<'_> {
        InputReader::new(&self.input, position)
    }
}

/// Cursor over the input bytes with one byte of pushback.
#[derive(Debug, Clone)]
pub struct InputReader<'a> {
    input: &'a [u8],
    position: usize,
    pushed_back: bool,
}

impl<'a> InputReader<'a> {
    pub fn new(input: &'a [u8], position: usize) -> Self {
        Self { input, position, pushed_back: false }
    }

    /// Index of the next unread byte. May lie past the end.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Next unread byte, or `None` at end of input.
    ///
    /// The cursor advances either way, so input appended later starts after
    /// every position already read.
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.input.get(self.position).copied();
        self.position += 1;
        self.pushed_back = false;
        byte
    }

    /// Push the byte just read back onto the input.
    ///
    /// Only one byte can be pushed back between reads.
    pub fn unread(&mut self) {
        if !self.pushed_back && self.position > 0 {
            self.position -= 1;
            self.pushed_back = true;
        }
    }

    /// Parse a signed decimal integer.
    ///
    /// Skips bytes until a digit, `+`, `-`, or end of input (consuming the
    /// sign or the end-of-input position), then consumes consecutive digits.
    /// The first non-digit is left unread. Returns 0 when no digit follows.
    pub fn parse_integer(&mut self) -> Value {
        let mut negative = false;
        loop {
            match self.read_byte() {
                None | Some(b'+') => break,
                Some(b'-') => {
                    negative = true;
                    break;
                }
                Some(b'0'..=b'9') => {
                    self.unread();
                    break;
                }
                Some(_) => {}
            }
        }

        let mut value = Value::default();
        loop {
            match self.read_byte() {
                Some(byte) if byte.is_ascii_digit() => {
                    value = value * 10u32 + u32::from(byte - b'0');
                }
                _ => {
                    self.unread();
                    break;
                }
            }
        }

        if negative { -value } else { value }
    }
}
