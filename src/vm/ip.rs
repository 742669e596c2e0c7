//! Instruction pointers.
//!
//! Six pointers exist at all times, one per hexagon corner. Each walks the
//! grid independently; only the active one executes on a given tick.

use std::collections::VecDeque;

use serde::Serialize;

use crate::core::geometry::index_of;
use crate::core::{row_count, row_size, AxialPoint, Direction};

/// Number of instruction pointers.
pub const IP_COUNT: usize = 6;

/// Number of recent positions kept per pointer.
pub const HISTORY_LEN: usize = 20;

/// One recorded position: grid row, grid column, and travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub i: usize,
    pub j: usize,
    pub dir: Direction,
}

/// Position, direction, and execution record of one instruction pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionPointer {
    pub coords: AxialPoint,
    pub dir: Direction,
    /// Per cell, a six-bit set of directions this pointer executed it in.
    executed: Vec<Vec<u8>>,
    /// Newest first.
    history: VecDeque<HistoryEntry>,
}

impl InstructionPointer {
    /// A pointer at `coords` heading `dir` on a hexagon of edge length `size`.
    pub fn new(size: usize, coords: AxialPoint, dir: Direction) -> Self {
        let executed = (0..row_count(size)).map(|i| vec![0; row_size(size, i)]).collect();
        let mut ip = Self {
            coords,
            dir,
            executed,
            history: VecDeque::with_capacity(HISTORY_LEN),
        };
        let (i, j) = index_of(size, coords);
        ip.record_position(i, j);
        ip
    }

    /// Record that the cell at `(i, j)` was executed in the current direction.
    pub fn mark_executed(&mut self, i: usize, j: usize) {
        if let Some(cell) = self.executed.get_mut(i).and_then(|row| row.get_mut(j)) {
            *cell |= self.dir.bit();
        }
    }

    /// Push the current position onto the history.
    pub fn record_position(&mut self, i: usize, j: usize) {
        if self.history.len() == HISTORY_LEN {
            self.history.pop_back();
        }
        self.history.push_front(HistoryEntry { i, j, dir: self.dir });
    }

    /// Directions in which this pointer executed the cell at `(i, j)`.
    pub fn executed_dirs(&self, i: usize, j: usize) -> Vec<Direction> {
        let mask = self
            .executed
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0);
        Direction::ALL.into_iter().filter(|d| mask & d.bit() != 0).collect()
    }

    /// True if this pointer executed the cell at `(i, j)` in any direction.
    pub fn was_executed(&self, i: usize, j: usize) -> bool {
        self.executed
            .get(i)
            .and_then(|row| row.get(j))
            .is_some_and(|&mask| mask != 0)
    }

    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }
}

/// The six pointers in index order, each starting at a corner.
pub fn initial_ips(size: usize) -> [InstructionPointer; IP_COUNT] {
    let n = size as i64;
    let start = |q: i64, r: i64, dir: Direction| {
        InstructionPointer::new(size, AxialPoint::new(q, r), dir)
    };
    [
        start(0, 1 - n, Direction::E),
        start(n - 1, 1 - n, Direction::SE),
        start(n - 1, 0, Direction::SW),
        start(0, n - 1, Direction::W),
        start(1 - n, n - 1, Direction::NW),
        start(1 - n, 0, Direction::NE),
    ]
}
