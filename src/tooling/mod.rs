//! Tooling layer for Hexagony.
//!
//! Helpers for front ends built on the engine:
//!
//! - **Instructions**: plain-language descriptions of each opcode
//! - **Snapshot**: a serializable view of a program's state

pub mod instructions;
pub mod snapshot;

pub use instructions::describe;
pub use snapshot::{EdgeSnapshot, IpSnapshot, StateSnapshot};
