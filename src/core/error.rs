//! Error types for the Hexagony engine.
//!
//! Only host-level misuse is reported through `HexagonyError`. A program that
//! divides by zero or reaches `@` is not an error: it ends in a terminal
//! state whose `TerminationReason` the caller inspects.
//!
//! # Error Categories
//!
//! - **Geometry**: coordinates outside the hexagon (an engine or caller bug)
//! - **Source**: replacing the source with one of a different hexagon size
//! - **Parse**: unparseable direction codes or IP indices

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type HexResult<T> = Result<T, HexagonyError>;

/// Errors raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexagonyError {
    /// Axial coordinates are not inside a hexagon of the given size.
    #[error("coordinates ({q}, {r}) are out of bounds for a hexagon of size {size}")]
    OutOfBounds { q: i64, r: i64, size: usize },

    /// A replacement source would change the hexagon size of a running program.
    #[error("hexagon size change from {expected} to {found} while a program is attached")]
    SizeMismatch { expected: usize, found: usize },

    /// A direction code other than E, NE, NW, W, SW, SE.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// An instruction pointer index outside 0..6.
    #[error("invalid instruction pointer index: {0}")]
    InvalidIpIndex(usize),
}

/// Coarse classification of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Geometry,
    Source,
    Parse,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Geometry => "geometry",
            ErrorCategory::Source => "source",
            ErrorCategory::Parse => "parse",
        };
        f.write_str(name)
    }
}

impl HexagonyError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            HexagonyError::OutOfBounds { .. } => ErrorCategory::Geometry,
            HexagonyError::SizeMismatch { .. } => ErrorCategory::Source,
            HexagonyError::InvalidDirection(_) |
            HexagonyError::InvalidIpIndex(_) => ErrorCategory::Parse,
        }
    }

    /// Get the error code for programmatic handling.
    pub fn code(&self) -> u32 {
        match self {
            // Geometry: 1000-1999
            HexagonyError::OutOfBounds { .. } => 1001,
            // Source: 2000-2999
            HexagonyError::SizeMismatch { .. } => 2001,
            // Parse: 3000-3999
            HexagonyError::InvalidDirection(_) => 3001,
            HexagonyError::InvalidIpIndex(_) => 3002,
        }
    }
}

/// Why a program stopped.
///
/// Once set on an execution state, further steps are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The `@` opcode was executed.
    Terminated,
    /// `:` or `%` found a zero right neighbor outside speculative mode.
    DivisionByZero,
}

impl TerminationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::Terminated => "terminated",
            TerminationReason::DivisionByZero => "division by zero",
        }
    }

    /// True for terminations caused by a runtime fault rather than `@`.
    pub fn is_error(&self) -> bool {
        matches!(self, TerminationReason::DivisionByZero)
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
