//! Integration tests for Hexagony.
//!
//! This module organises integration tests by component.

pub mod engine;
pub mod edges;
pub mod source;
