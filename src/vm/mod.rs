//! Virtual machine for Hexagony programs.
//!
//! # Architecture
//!
//! Execution is split into a read-only [`ExecutionContext`] (source grid,
//! input bytes, mode flags) and a mutable [`ExecutionState`] (memory, six
//! instruction pointers, output, tick counter). The context may be swapped
//! between steps as long as the hexagon size stays fixed.
//!
//! - `context`: the context and the input reader used by `,` and `?`
//! - `ip`: instruction pointers with execution tracking
//! - `topology`: one-cell movement and the edge-wrap protocol
//! - `state`: the stepping algorithm and opcode dispatch
//! - `engine`: the [`Hexagony`] facade and the run loop
//!
//! # Layer 2 - depends on core and source

pub mod context;
pub mod ip;
pub mod topology;
pub mod state;
pub mod engine;

pub use context::{ExecutionContext, InputReader};
pub use ip::{initial_ips, HistoryEntry, InstructionPointer, HISTORY_LEN, IP_COUNT};
pub use topology::{advance, EdgeKind, EdgeTraversal, Movement};
pub use state::ExecutionState;
pub use engine::{Hexagony, RunConfig, RunOutcome};
