//! Memory for the Hexagony virtual machine.
//!
//! Memory is an infinite hexagonal lattice whose *edges* hold values. Every
//! edge is keyed by an axial point plus one of three canonical directions
//! (NE, E, SE), so no edge has two names. A memory pointer sits on one edge
//! facing one of its two ends; the two other edges meeting at that end are
//! its left and right neighbours. Seen this way the edges form an infinite
//! unrooted binary tree.
//!
//! Initially all edges are zero and the pointer is at `(0,0),E` facing
//! counterclockwise.

use std::collections::BTreeMap;
use std::fmt;

use num_traits::Zero;
use serde::Serialize;

use super::direction::Direction;
use super::geometry::AxialPoint;
use super::value::Value;

/// Canonical address of one memory edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    pub point: AxialPoint,
    /// Always NE, E, or SE.
    pub dir: Direction,
}

impl EdgeKey {
    /// Column of this edge in the memory-view lattice.
    pub fn x(&self) -> i64 {
        4 * self.point.q + 2 * self.point.r + if self.dir == Direction::E { 1 } else { 0 }
    }

    /// Row of this edge in the memory-view lattice.
    pub fn y(&self) -> i64 {
        let offset = match self.dir {
            Direction::NE => 0,
            Direction::E => 1,
            _ => 2,
        };
        2 * self.point.r + offset
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.point, self.dir)
    }
}

/// Position, canonical direction, and orientation of the memory pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MemoryPointer {
    pub point: AxialPoint,
    pub dir: Direction,
    /// Clockwise orientation; decides which neighbour is left and which right.
    pub cw: bool,
}

impl Default for MemoryPointer {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl MemoryPointer {
    pub const INITIAL: MemoryPointer = MemoryPointer {
        point: AxialPoint::ORIGIN,
        dir: Direction::E,
        cw: false,
    };

    pub fn new(point: AxialPoint, dir: Direction, cw: bool) -> Self {
        MemoryPointer { point, dir, cw }
    }

    /// The edge under the pointer.
    #[inline]
    pub fn key(&self) -> EdgeKey {
        EdgeKey { point: self.point, dir: self.dir }
    }

    pub fn x(&self) -> i64 {
        self.key().x()
    }

    pub fn y(&self) -> i64 {
        self.key().y()
    }

    /// Flip the orientation without moving.
    pub fn reversed(self) -> MemoryPointer {
        MemoryPointer { cw: !self.cw, ..self }
    }

    /// The left neighbour.
    pub fn left(self) -> MemoryPointer {
        let MemoryPointer { point: p, dir, cw } = self;
        match dir {
            Direction::NE => MemoryPointer::new(
                if cw { AxialPoint::new(p.q + 1, p.r - 1) } else { AxialPoint::new(p.q, p.r - 1) },
                Direction::SE,
                !cw,
            ),
            Direction::E => MemoryPointer::new(
                if cw { AxialPoint::new(p.q, p.r + 1) } else { p },
                Direction::NE,
                cw,
            ),
            _ => MemoryPointer::new(
                if cw { AxialPoint::new(p.q - 1, p.r + 1) } else { p },
                Direction::E,
                cw,
            ),
        }
    }

    /// The right neighbour.
    pub fn right(self) -> MemoryPointer {
        let MemoryPointer { point: p, dir, cw } = self;
        match dir {
            Direction::NE => MemoryPointer::new(
                if cw { p } else { AxialPoint::new(p.q, p.r - 1) },
                Direction::E,
                cw,
            ),
            Direction::E => MemoryPointer::new(
                if cw { p } else { AxialPoint::new(p.q + 1, p.r - 1) },
                Direction::SE,
                cw,
            ),
            _ => MemoryPointer::new(
                if cw { AxialPoint::new(p.q - 1, p.r + 1) } else { AxialPoint::new(p.q, p.r + 1) },
                Direction::NE,
                !cw,
            ),
        }
    }

    /// Move backwards and to the left (`"`). Undoes [`MemoryPointer::left`].
    pub fn back_left(self) -> MemoryPointer {
        self.reversed().right().reversed()
    }

    /// Move backwards and to the right (`'`). Undoes [`MemoryPointer::right`].
    pub fn back_right(self) -> MemoryPointer {
        self.reversed().left().reversed()
    }
}

/// Bounding box of every edge written so far, in memory-view lattice units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryBounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl MemoryBounds {
    fn at(key: EdgeKey) -> Self {
        let (x, y) = (key.x(), key.y());
        MemoryBounds { min_x: x, max_x: x, min_y: y, max_y: y }
    }

    fn include(&mut self, key: EdgeKey) {
        let (x, y) = (key.x(), key.y());
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

/// The memory state: every written edge plus the memory pointer.
///
/// Unwritten edges read as zero. Edges are stored in a `BTreeMap` so that
/// enumeration order is deterministic.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Memory {
    edges: BTreeMap<EdgeKey, Value>,
    pointer: MemoryPointer,
    /// Incremented on every write.
    data_version: u64,
    bounds: Option<MemoryBounds>,
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nonzero: Vec<_> = self.edges.iter().filter(|(_, v)| !v.is_zero()).collect();

        write!(f, "Memory{{mp={},cw={}", self.pointer.key(), self.pointer.cw)?;
        if nonzero.is_empty() {
            write!(f, ", all zero}}")
        } else {
            for (key, value) in nonzero {
                write!(f, ", [{}]={}", key, value)?;
            }
            write!(f, "}}")
        }
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> MemoryPointer {
        self.pointer
    }

    /// Read an arbitrary edge.
    pub fn value_at(&self, key: EdgeKey) -> Value {
        self.edges.get(&key).cloned().unwrap_or_default()
    }

    /// Value of the current edge.
    pub fn value(&self) -> Value {
        self.value_at(self.pointer.key())
    }

    /// Value of the left neighbour.
    pub fn left(&self) -> Value {
        self.value_at(self.pointer.left().key())
    }

    /// Value of the right neighbour.
    pub fn right(&self) -> Value {
        self.value_at(self.pointer.right().key())
    }

    /// Write the current edge.
    pub fn set_value(&mut self, value: Value) {
        self.set_value_at(self.pointer.key(), value);
    }

    /// Write an arbitrary edge.
    pub fn set_value_at(&mut self, key: EdgeKey, value: Value) {
        match self.bounds.as_mut() {
            Some(bounds) => bounds.include(key),
            None => self.bounds = Some(MemoryBounds::at(key)),
        }
        self.edges.insert(key, value);
        self.data_version += 1;
    }

    pub fn reverse(&mut self) {
        self.pointer = self.pointer.reversed();
    }

    pub fn move_left(&mut self) {
        self.pointer = self.pointer.left();
    }

    pub fn move_right(&mut self) {
        self.pointer = self.pointer.right();
    }

    pub fn move_back_left(&mut self) {
        self.pointer = self.pointer.back_left();
    }

    pub fn move_back_right(&mut self) {
        self.pointer = self.pointer.back_right();
    }

    /// All written edges in key order, including edges written back to zero.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &Value)> {
        self.edges.iter()
    }

    /// Number of edges ever written.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn data_version(&self) -> u64 {
        self.data_version
    }

    /// Bounding box of written edges, or `None` if nothing was written.
    pub fn bounds(&self) -> Option<MemoryBounds> {
        self.bounds
    }

    /// Pointer line followed by one `q,r,DIR,value` line per written edge.
    pub fn debug_string(&self) -> String {
        let mut text = format!("{},{}", self.pointer.key(), self.pointer.cw);
        for (key, value) in &self.edges {
            text.push_str(&format!("\n{},{}", key, value));
        }
        text
    }
}
