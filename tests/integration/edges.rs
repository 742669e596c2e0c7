//! Integration tests for edge and corner wrapping.
//!
//! Component: Topology
//!
//! These tests verify:
//! - Plain edge crossings mirror the row and report type `0`
//! - Corner crossings branch on the sign of the current memory edge
//! - Traversals are reported once per step, in order
//! - Size 1 hexagons never report a crossing

#![cfg(test)]

use crate::common::*;

use hexagony::*;
use hexagony::vm::{advance, EdgeKind};

#[test]
fn walking_off_east_edge_reports_one_plain_crossing() {
    // Arrange
    let mut program = Hexagony::new(".......", "");

    // Act
    let edges = collect_edges(&mut program, 2);

    // Assert
    assert_eq!(edges, vec!["1,-1,E,0"]);
    assert_eq!(program.coords(), AxialPoint::new(-1, 0));
}

#[test]
fn positive_corner_takes_plus_branch() {
    let mut program = Hexagony::new(")))))!@", "");
    let edges = collect_edges(&mut program, 5);
    assert_eq!(edges.last().map(String::as_str), Some("1,0,E,+"));
    assert_eq!(program.coords(), AxialPoint::new(-1, 1));
}

#[test]
fn negative_corner_takes_minus_branch() {
    let mut program = Hexagony::new("(((((!@", "");
    let edges = collect_edges(&mut program, 5);
    assert_eq!(edges.last().map(String::as_str), Some("1,0,E,-"));
    assert_eq!(program.coords(), AxialPoint::new(0, -1));
}

#[test]
fn zero_counts_as_non_positive_at_corners() {
    let mut program = Hexagony::new(".......", "");
    let edges = collect_edges(&mut program, 5);
    assert_eq!(edges, vec!["1,-1,E,0", "1,0,E,-"]);
    assert_eq!(program.coords(), AxialPoint::new(0, -1));
}

#[test]
fn traversals_are_flagged_as_branches_only_at_corners() {
    // Arrange
    let mut program = Hexagony::new(")))))!@", "");
    let mut traversals = Vec::new();

    // Act
    for _ in 0..5 {
        program.step().unwrap();
        traversals.extend(program.take_edge_traversals());
    }

    // Assert
    assert_eq!(traversals.len(), 2);
    assert!(!traversals[0].is_branch());
    assert_eq!(traversals[1].kind, EdgeKind::Positive);
    assert!(traversals[1].is_branch());
}

#[test]
fn size_three_walk_follows_rows_and_corners() {
    // Arrange
    let mut program = Hexagony::new("...................", "");

    // Act
    let coords = trace_coords(&mut program, 8);

    // Assert
    assert_eq!(
        coords,
        vec![(1, -2), (2, -2), (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0), (0, -2)]
    );
}

#[test]
fn size_one_never_crosses() {
    let mut program = Hexagony::new(".", "");
    let edges = collect_edges(&mut program, 20);
    assert!(edges.is_empty());
    assert_eq!(program.coords(), AxialPoint::ORIGIN);
}

#[test]
fn skip_over_edge_reports_crossing() {
    let mut program = Hexagony::new("$......", "");
    let edges = collect_edges(&mut program, 1);
    assert_eq!(edges, vec!["1,-1,E,0"]);
    assert_eq!(program.coords(), AxialPoint::new(-1, 0));
}

#[test]
fn reverse_mode_moves_backwards_before_executing() {
    // Arrange
    let mut program = Hexagony::new(".......", "");
    program.set_reverse(true);

    // Act
    let edges = collect_edges(&mut program, 1);
    let first = program.coords();
    program.step().unwrap();

    // Assert: W from (0,-1) leaves through the top-left edge.
    assert_eq!(edges, vec!["0,-1,W,0"]);
    assert_eq!(first, AxialPoint::new(1, 0));
    assert_eq!(program.coords(), AxialPoint::new(0, 0));
    assert_eq!(program.dir(), Direction::E);
}

#[test]
fn every_crossing_lands_inside() {
    for size in 2..7usize {
        let n = size as i64;
        for q in (1 - n)..n {
            for r in (1 - n)..n {
                let point = AxialPoint::new(q, r);
                if !point.in_bounds(size) {
                    continue;
                }
                for dir in Direction::ALL {
                    for positive in [false, true] {
                        let movement = advance(size, point, dir, positive);
                        assert!(movement.coords.in_bounds(size), "{point} {dir} {positive}");
                    }
                }
            }
        }
    }
}
