//! Shared test utilities for Hexagony integration tests.
//!
//! This module provides:
//! - Program runners with a default tick limit
//! - Step helpers that collect edge traversals
//! - Assertion helpers for run outcomes and output
//!
//! ## AAA Pattern
//!
//! All tests follow the Arrange-Act-Assert pattern:
//! - Arrange: Set up the program and its input
//! - Act: Run or step the program
//! - Assert: Verify the expected outcome

#![allow(dead_code)]

use hexagony::*;

// =============================================================================
// Program Runners
// =============================================================================

/// Tick limit used by the runners; generous for every program in the suite.
pub const TEST_MAX_TICKS: u64 = 100_000;

/// Run a program to completion (or the test tick limit).
///
/// # Panics
/// Panics if the engine reports a host error, which is appropriate for test code.
pub fn run(source: &str, input: &str) -> (Hexagony, RunOutcome) {
    run_with_limit(source, input, TEST_MAX_TICKS)
}

/// Run a program with a custom tick limit.
pub fn run_with_limit(source: &str, input: &str, max_ticks: u64) -> (Hexagony, RunOutcome) {
    let mut program = Hexagony::new(source, input);
    let outcome = program
        .run(&RunConfig { max_ticks })
        .expect("engine error");
    (program, outcome)
}

/// Step `steps` times, returning the key of every edge crossed.
pub fn collect_edges(program: &mut Hexagony, steps: usize) -> Vec<String> {
    let mut edges = Vec::new();
    for _ in 0..steps {
        program.step().expect("engine error");
        edges.extend(program.take_edge_traversals().iter().map(EdgeTraversal::edge_key));
    }
    edges
}

/// Step `steps` times, returning the active IP's coordinates after each step.
pub fn trace_coords(program: &mut Hexagony, steps: usize) -> Vec<(i64, i64)> {
    (0..steps)
        .map(|_| {
            program.step().expect("engine error");
            let coords = program.coords();
            (coords.q, coords.r)
        })
        .collect()
}

// =============================================================================
// Assertion Helpers
// =============================================================================

/// Assert that a run ended on `@`.
pub fn assert_terminated(outcome: &RunOutcome) {
    assert_eq!(
        *outcome,
        RunOutcome::Terminated(TerminationReason::Terminated),
        "Expected termination, got {:?}",
        outcome
    );
}

/// Assert that a run ended on division by zero.
pub fn assert_division_by_zero(outcome: &RunOutcome) {
    assert_eq!(
        *outcome,
        RunOutcome::Terminated(TerminationReason::DivisionByZero),
        "Expected division by zero, got {:?}",
        outcome
    );
}

/// Assert that a run hit the tick limit.
pub fn assert_tick_limit(outcome: &RunOutcome) {
    assert_eq!(*outcome, RunOutcome::TickLimit, "Expected tick limit, got {:?}", outcome);
}

/// Assert the program's output as text.
pub fn assert_output(program: &Hexagony, expected: &str) {
    assert_eq!(
        program.output_string(),
        expected,
        "Unexpected output after {} ticks",
        program.ticks()
    );
}

/// Assert the value of the current memory edge.
pub fn assert_current_value(program: &Hexagony, expected: i64) {
    assert_eq!(program.memory().value(), Value::from(expected));
}
