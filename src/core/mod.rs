//! Core types for the Hexagony virtual machine.
//!
//! This module defines the fundamental data types that the rest of the
//! engine builds on:
//!
//! - **Geometry**: axial coordinates and hexagon sizing
//! - **Direction**: the six grid directions and their reflection algebra
//! - **Value**: arbitrary-precision edge values with floor division
//! - **Memory**: the edge-addressed memory lattice and its pointer
//! - **Error**: host-level errors and program termination reasons
//!
//! # Layer 0 - No Internal Dependencies
//!
//! This module has no dependencies on other modules of the crate,
//! allowing it to be imported by all other layers.

pub mod error;
pub mod geometry;
pub mod direction;
pub mod value;
pub mod memory;

// Re-export primary types at module level
pub use error::{HexagonyError, HexResult, ErrorCategory, TerminationReason};
pub use geometry::{AxialPoint, row_count, row_size, code_length, hexagon_size, to_index, to_axial};
pub use direction::{Direction, Mirror, Branch};
pub use value::Value;
pub use memory::{Memory, MemoryPointer, MemoryBounds, EdgeKey};
