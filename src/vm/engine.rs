//! The `Hexagony` facade: a program, its input, and its running state.

use std::borrow::Cow;

use tracing::{debug, info};

use crate::core::{to_index, AxialPoint, Direction, EdgeKey, HexResult, HexagonyError, Memory, TerminationReason, Value};
use crate::source::SourceGrid;

use super::context::ExecutionContext;
use super::ip::{InstructionPointer, IP_COUNT};
use super::state::ExecutionState;
use super::topology::EdgeTraversal;

/// Configuration for [`Hexagony::run`].
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum ticks before giving up (gas limit).
    pub max_ticks: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { max_ticks: 10_000_000 }
    }
}

/// How a call to [`Hexagony::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program stopped on its own.
    Terminated(TerminationReason),
    /// The tick limit was reached first.
    TickLimit,
}

/// A Hexagony program together with its input and execution state.
#[derive(Debug, Clone)]
pub struct Hexagony {
    context: ExecutionContext,
    state: ExecutionState,
}

impl Hexagony {
    /// Lay out `source` on the smallest hexagon that fits and prepare to run it.
    pub fn new(source: &str, input: &str) -> Self {
        let grid = SourceGrid::parse(source);
        let state = ExecutionState::new(grid.size());
        debug!(size = grid.size(), input_len = input.len(), "program loaded");
        Self {
            context: ExecutionContext::new(grid, input.as_bytes()),
            state,
        }
    }

    /// Replace the source. The hexagon size must not change.
    pub fn set_source_code(&mut self, source: &str) -> HexResult<()> {
        self.context.set_source_code(SourceGrid::parse(source))
    }

    /// Replace the input. Bytes already consumed stay consumed.
    pub fn set_input(&mut self, input: &str) {
        self.context.set_input(input.as_bytes());
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.context.reverse = reverse;
    }

    pub fn set_speculative(&mut self, speculative: bool) {
        self.context.speculative = speculative;
    }

    /// Execute one tick. A terminated program ignores further steps.
    pub fn step(&mut self) -> HexResult<()> {
        self.state.step(&self.context)
    }

    /// Step until the program stops or `config.max_ticks` ticks have elapsed in total.
    pub fn run(&mut self, config: &RunConfig) -> HexResult<RunOutcome> {
        while self.state.ticks < config.max_ticks {
            if let Some(reason) = self.state.termination_reason {
                info!(ticks = self.state.ticks, reason = %reason, "program finished");
                return Ok(RunOutcome::Terminated(reason));
            }
            self.step()?;
        }

        match self.state.termination_reason {
            Some(reason) => {
                info!(ticks = self.state.ticks, reason = %reason, "program finished");
                Ok(RunOutcome::Terminated(reason))
            }
            None => {
                info!(ticks = self.state.ticks, "tick limit reached");
                Ok(RunOutcome::TickLimit)
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Observers
    // ═══════════════════════════════════════════════════════════════════

    pub fn size(&self) -> usize {
        self.state.size()
    }

    pub fn grid(&self) -> &SourceGrid {
        self.context.grid()
    }

    pub fn active_ip(&self) -> usize {
        self.state.active_ip
    }

    /// Coordinates of the active IP.
    pub fn coords(&self) -> AxialPoint {
        self.state.active().coords
    }

    /// Direction of the active IP.
    pub fn dir(&self) -> Direction {
        self.state.active().dir
    }

    pub fn ip(&self, index: usize) -> HexResult<&InstructionPointer> {
        self.state.ips.get(index).ok_or(HexagonyError::InvalidIpIndex(index))
    }

    pub fn ips(&self) -> &[InstructionPointer] {
        &self.state.ips
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    pub fn output(&self) -> &[u8] {
        &self.state.output
    }

    /// Output decoded as UTF-8, with invalid sequences replaced.
    pub fn output_string(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.state.output)
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    pub fn input_position(&self) -> usize {
        self.state.input_position
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        self.state.termination_reason
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    /// Edge crossings from the most recent step. Each is returned once.
    pub fn take_edge_traversals(&mut self) -> Vec<EdgeTraversal> {
        std::mem::take(&mut self.state.edge_traversals)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Tooling mutators
    // ═══════════════════════════════════════════════════════════════════

    /// Overwrite one memory edge.
    pub fn set_memory_value(&mut self, key: EdgeKey, value: Value) {
        self.state.memory.set_value_at(key, value);
    }

    /// Place an IP. The coordinates must lie inside the hexagon.
    pub fn set_ip_location(&mut self, index: usize, coords: AxialPoint, dir: Direction) -> HexResult<()> {
        if index >= IP_COUNT {
            return Err(HexagonyError::InvalidIpIndex(index));
        }
        let (i, j) = to_index(self.size(), coords)?;
        let ip = &mut self.state.ips[index];
        ip.coords = coords;
        ip.dir = dir;
        ip.record_position(i, j);
        Ok(())
    }
}
