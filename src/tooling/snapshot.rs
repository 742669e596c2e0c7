//! Serializable snapshot of a program's state.
//!
//! Values are arbitrary-precision, so they are written as decimal strings.

use serde::Serialize;

use crate::core::{AxialPoint, Direction, EdgeKey, MemoryBounds, MemoryPointer};
use crate::vm::{EdgeTraversal, Hexagony};

/// One instruction pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpSnapshot {
    pub index: usize,
    pub coords: AxialPoint,
    pub dir: Direction,
    pub active: bool,
}

/// One written memory edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    pub key: EdgeKey,
    pub x: i64,
    pub y: i64,
    pub value: String,
}

/// Everything an observer can read from a program between steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub size: usize,
    pub ticks: u64,
    pub active_ip: usize,
    pub ips: Vec<IpSnapshot>,
    /// Lossy UTF-8 rendering of the output bytes.
    pub output: String,
    pub output_bytes: Vec<u8>,
    pub input_position: usize,
    pub termination_reason: Option<String>,
    pub memory_pointer: MemoryPointer,
    pub memory_bounds: Option<MemoryBounds>,
    pub memory: Vec<EdgeSnapshot>,
    pub edge_traversals: Vec<String>,
}

impl StateSnapshot {
    /// Capture `program`, including edge crossings already taken from it.
    pub fn capture(program: &Hexagony, edge_traversals: &[EdgeTraversal]) -> Self {
        let active_ip = program.active_ip();
        let memory = program.memory();
        Self {
            size: program.size(),
            ticks: program.ticks(),
            active_ip,
            ips: program
                .ips()
                .iter()
                .enumerate()
                .map(|(index, ip)| IpSnapshot {
                    index,
                    coords: ip.coords,
                    dir: ip.dir,
                    active: index == active_ip,
                })
                .collect(),
            output: program.output_string().into_owned(),
            output_bytes: program.output().to_vec(),
            input_position: program.input_position(),
            termination_reason: program.termination_reason().map(|r| r.as_str().to_string()),
            memory_pointer: memory.pointer(),
            memory_bounds: memory.bounds(),
            memory: memory
                .edges()
                .map(|(key, value)| EdgeSnapshot {
                    key: *key,
                    x: key.x(),
                    y: key.y(),
                    value: value.to_string(),
                })
                .collect(),
            edge_traversals: edge_traversals.iter().map(EdgeTraversal::edge_key).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
