//! Axial coordinates and hexagon sizing.
//!
//! A hexagon of edge length N has `2N-1` rows. Points are addressed by axial
//! coordinates `(q, r)` with the implied cubic coordinate `y = -q - r`; a
//! point lies inside the hexagon iff `max(|q|, |y|, |r|) < N`. The centre of
//! the hexagon is `(0, 0)` and `r` grows downwards row by row.

use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

use super::error::{HexResult, HexagonyError};

/// A point on the hexagonal lattice in axial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct AxialPoint {
    pub q: i64,
    pub r: i64,
}

impl AxialPoint {
    pub const ORIGIN: AxialPoint = AxialPoint { q: 0, r: 0 };

    pub const fn new(q: i64, r: i64) -> Self {
        AxialPoint { q, r }
    }

    /// The implied third cubic coordinate.
    ///
    /// Only meaningful for points near a hexagon; use [`AxialPoint::ring`]
    /// for arbitrary input.
    #[inline]
    pub fn y(&self) -> i64 {
        -self.q - self.r
    }

    /// Distance from the centre in hexagon steps.
    ///
    /// Computed in wider arithmetic so that any `i64` pair is accepted.
    #[inline]
    pub fn ring(&self) -> u128 {
        let y = -(i128::from(self.q) + i128::from(self.r));
        u128::from(self.q.unsigned_abs())
            .max(u128::from(self.r.unsigned_abs()))
            .max(y.unsigned_abs())
    }

    /// Check whether the point lies inside a hexagon of edge length `size`.
    #[inline]
    pub fn in_bounds(&self, size: usize) -> bool {
        self.ring() < size as u128
    }
}

impl Add<(i64, i64)> for AxialPoint {
    type Output = AxialPoint;

    fn add(self, (q, r): (i64, i64)) -> AxialPoint {
        AxialPoint::new(self.q + q, self.r + r)
    }
}

impl Sub<(i64, i64)> for AxialPoint {
    type Output = AxialPoint;

    fn sub(self, (q, r): (i64, i64)) -> AxialPoint {
        AxialPoint::new(self.q - q, self.r - r)
    }
}

impl fmt::Display for AxialPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// Number of rows in a hexagon of edge length `size`.
#[inline]
pub fn row_count(size: usize) -> usize {
    2 * size - 1
}

/// Number of cells in row `i` of a hexagon of edge length `size`.
#[inline]
pub fn row_size(size: usize, i: usize) -> usize {
    size + i.min(row_count(size) - 1 - i)
}

/// Number of cells in a hexagon of edge length `size`.
///
/// `code_length(0)` is 0 so that `code_length(size - 1)` is always defined.
pub fn code_length(size: usize) -> usize {
    if size == 0 {
        0
    } else {
        1 + 3 * size * (size - 1)
    }
}

/// Smallest hexagon that fits `length` opcodes.
///
/// The closed form `ceil((3 + sqrt(12L - 3)) / 6)` is only used as a starting
/// estimate; the result is corrected until
/// `code_length(N - 1) < length <= code_length(N)` holds exactly.
pub fn hexagon_size(length: usize) -> usize {
    if length == 0 {
        return 1;
    }

    let estimate = ((3.0 + (12.0 * length as f64 - 3.0).sqrt()) / 6.0).ceil();
    let mut size = (estimate as usize).max(1);
    while code_length(size) < length {
        size += 1;
    }
    while size > 1 && code_length(size - 1) >= length {
        size -= 1;
    }
    size
}

/// Convert axial coordinates to `(row, column)` grid indices.
pub fn to_index(size: usize, point: AxialPoint) -> HexResult<(usize, usize)> {
    if !point.in_bounds(size) {
        return Err(HexagonyError::OutOfBounds { q: point.q, r: point.r, size });
    }
    Ok(index_of(size, point))
}

/// Unchecked form of [`to_index`] for points already known to be inside.
pub(crate) fn index_of(size: usize, point: AxialPoint) -> (usize, usize) {
    debug_assert!(point.in_bounds(size));
    let n = size as i64;
    let i = point.r + n - 1;
    let j = point.q + i.min(n - 1);
    (i as usize, j as usize)
}

/// Convert `(row, column)` grid indices back to axial coordinates.
///
/// Inverse of [`to_index`] for every valid index pair.
pub fn to_axial(size: usize, i: usize, j: usize) -> AxialPoint {
    let n = size as i64;
    let i = i as i64;
    let j = j as i64;
    AxialPoint::new((1 - n).max(-i) + j, i - n + 1)
}

/// All points of a hexagon in row-major order.
pub fn points(size: usize) -> impl Iterator<Item = AxialPoint> {
    (0..row_count(size))
        .flat_map(move |i| (0..row_size(size, i)).map(move |j| to_axial(size, i, j)))
}
