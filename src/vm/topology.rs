//! Hexagon topology: moving an IP and wrapping it around the edges.
//!
//! Leaving the hexagon through an edge re-enters on the opposite edge, with
//! the row mirrored. Leaving through a corner re-enters at one of two
//! corners chosen by the sign of the current memory edge.

use std::fmt;

use serde::Serialize;

use crate::core::{AxialPoint, Direction};

/// How an edge crossing was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    /// Plain edge crossing.
    Plain,
    /// Corner crossing with a positive current value.
    Positive,
    /// Corner crossing with a zero or negative current value.
    NonPositive,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Plain => "0",
            EdgeKind::Positive => "+",
            EdgeKind::NonPositive => "-",
        }
    }
}

/// Notification that an IP crossed the hexagon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeTraversal {
    /// Last in-bounds cell before the crossing.
    pub from: AxialPoint,
    pub dir: Direction,
    pub kind: EdgeKind,
}

impl EdgeTraversal {
    /// Key of the form `q,r,DIR,type`.
    pub fn edge_key(&self) -> String {
        self.to_string()
    }

    /// Corner crossings depend on memory and count as branches.
    pub fn is_branch(&self) -> bool {
        self.kind != EdgeKind::Plain
    }
}

impl fmt::Display for EdgeTraversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.from, self.dir, self.kind.as_str())
    }
}

/// Result of moving one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub coords: AxialPoint,
    pub edge_traversal: Option<EdgeTraversal>,
}

/// Move one cell from `coords` in `dir`, wrapping at the boundary.
///
/// `coords` must be inside the hexagon. `is_positive` is the sign of the
/// current memory edge, used only at corners.
pub fn advance(size: usize, coords: AxialPoint, dir: Direction, is_positive: bool) -> Movement {
    if size == 1 {
        return Movement { coords: AxialPoint::ORIGIN, edge_traversal: None };
    }

    let next = coords + dir.vector();
    if next.in_bounds(size) {
        return Movement { coords: next, edge_traversal: None };
    }

    let n = size as i64;
    let q_big = next.q.abs() >= n;
    let y_big = next.y().abs() >= n;
    let r_big = next.r.abs() >= n;

    let across_r = AxialPoint::new(coords.q + coords.r, -coords.r);
    let across_q = AxialPoint::new(-coords.q, coords.q + coords.r);
    let across_y = AxialPoint::new(-coords.r, -coords.q);

    let (target, kind) = if !q_big && !y_big {
        (across_r, EdgeKind::Plain)
    } else if !y_big && !r_big {
        (across_q, EdgeKind::Plain)
    } else if !r_big && !q_big {
        (across_y, EdgeKind::Plain)
    } else {
        let kind = if is_positive { EdgeKind::Positive } else { EdgeKind::NonPositive };
        // Conditions overlap; order matters.
        let target = if (!q_big && !is_positive) || (!y_big && is_positive) {
            across_r
        } else if !y_big || (!r_big && is_positive) {
            across_q
        } else {
            across_y
        };
        (target, kind)
    };

    Movement {
        coords: target,
        edge_traversal: Some(EdgeTraversal { from: coords, dir, kind }),
    }
}
