//! Hexagony: an execution engine for the two-dimensional esoteric language.
//!
//! A program is laid out on a hexagonal grid and executed by six instruction
//! pointers that wrap around the hexagon's edges. Memory is an infinite
//! hexagonal lattice of arbitrary-precision integer edges.
//!
//! ```
//! use hexagony::{Hexagony, RunConfig, RunOutcome, TerminationReason};
//!
//! let mut program = Hexagony::new(")))))!@", "");
//! let outcome = program.run(&RunConfig::default()).unwrap();
//! assert_eq!(outcome, RunOutcome::Terminated(TerminationReason::Terminated));
//! assert_eq!(program.output(), b"5");
//! ```

// ═══════════════════════════════════════════════════════════════════════════
// Layer 0: Core (No internal dependencies)
// ═══════════════════════════════════════════════════════════════════════════
pub mod core;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 1: Source (depends on core)
// ═══════════════════════════════════════════════════════════════════════════
pub mod source;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 2: VM (depends on core, source)
// ═══════════════════════════════════════════════════════════════════════════
pub mod vm;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 3: Tooling (depends on all)
// ═══════════════════════════════════════════════════════════════════════════
pub mod tooling;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use crate::core::error::{HexagonyError, HexResult, ErrorCategory, TerminationReason};
pub use crate::core::{AxialPoint, Direction, EdgeKey, Memory, MemoryPointer, Value};
pub use source::SourceGrid;
pub use vm::{Hexagony, RunConfig, RunOutcome, EdgeTraversal, EdgeKind, ExecutionContext, ExecutionState};
pub use tooling::{describe, StateSnapshot};
