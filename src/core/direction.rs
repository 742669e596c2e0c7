//! The six unit directions of the hexagonal grid.
//!
//! Variants are ordered clockwise starting at east, so the discriminant times
//! 60 is the angle in degrees and rotation is index arithmetic. Reflections
//! are fixed lookup tables indexed by the discriminant.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::HexagonyError;

/// One of the six grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Direction {
    E = 0,
    SE = 1,
    SW = 2,
    W = 3,
    NW = 4,
    NE = 5,
}

use Direction::*;

/// The four plain mirror opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirror {
    /// `_`
    Underscore,
    /// `|`
    Pipe,
    /// `/`
    Slash,
    /// `\`
    Backslash,
}

impl Mirror {
    pub fn from_opcode(opcode: char) -> Option<Mirror> {
        match opcode {
            '_' => Some(Mirror::Underscore),
            '|' => Some(Mirror::Pipe),
            '/' => Some(Mirror::Slash),
            '\\' => Some(Mirror::Backslash),
            _ => None,
        }
    }

    pub const ALL: [Mirror; 4] = [Mirror::Underscore, Mirror::Pipe, Mirror::Slash, Mirror::Backslash];
}

/// The two sign-dependent branch opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
}

impl Branch {
    pub fn from_opcode(opcode: char) -> Option<Branch> {
        match opcode {
            '<' => Some(Branch::LessThan),
            '>' => Some(Branch::GreaterThan),
            _ => None,
        }
    }
}

// Tables are indexed by discriminant: E, SE, SW, W, NW, NE.
const UNDERSCORE: [Direction; 6] = [E, NE, NW, W, SW, SE];
const PIPE: [Direction; 6] = [W, SW, SE, E, NE, NW];
const SLASH: [Direction; 6] = [NW, W, SW, SE, E, NE];
const BACKSLASH: [Direction; 6] = [SW, SE, E, NE, NW, W];

// Outputs for (non-positive, positive). Equal entries act as a plain mirror.
const LESS_THAN: [(Direction, Direction); 6] = [
    (NE, SE),
    (NW, NW),
    (W, W),
    (E, E),
    (W, W),
    (SW, SW),
];
const GREATER_THAN: [(Direction, Direction); 6] = [
    (W, W),
    (E, E),
    (NE, NE),
    (SW, NW),
    (SE, SE),
    (E, E),
];

const VECTORS: [(i64, i64); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

impl Direction {
    /// All directions, clockwise from east.
    pub const ALL: [Direction; 6] = [E, SE, SW, W, NW, NE];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Unit displacement in axial coordinates.
    #[inline]
    pub fn vector(self) -> (i64, i64) {
        VECTORS[self.index()]
    }

    /// Angle in degrees, 0 at east and increasing clockwise.
    #[inline]
    pub fn angle(self) -> u32 {
        self.index() as u32 * 60
    }

    pub fn reverse(self) -> Direction {
        Self::ALL[(self.index() + 3) % 6]
    }

    pub fn rotate_clockwise(self) -> Direction {
        Self::ALL[(self.index() + 1) % 6]
    }

    pub fn rotate_counterclockwise(self) -> Direction {
        Self::ALL[(self.index() + 5) % 6]
    }

    /// Reflect off one of the plain mirrors.
    pub fn reflect(self, mirror: Mirror) -> Direction {
        let table = match mirror {
            Mirror::Underscore => &UNDERSCORE,
            Mirror::Pipe => &PIPE,
            Mirror::Slash => &SLASH,
            Mirror::Backslash => &BACKSLASH,
        };
        table[self.index()]
    }

    /// Reflect off `<` or `>`.
    ///
    /// Arriving at the pointed side of the branch turns 60 degrees clockwise
    /// when `is_positive` and counterclockwise otherwise; every other
    /// incoming direction has a single fixed output.
    pub fn reflect_branch(self, branch: Branch, is_positive: bool) -> Direction {
        let (non_positive, positive) = match branch {
            Branch::LessThan => LESS_THAN[self.index()],
            Branch::GreaterThan => GREATER_THAN[self.index()],
        };
        if is_positive { positive } else { non_positive }
    }

    /// Two-letter code used in edge names and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            E => "E",
            SE => "SE",
            SW => "SW",
            W => "W",
            NW => "NW",
            NE => "NE",
        }
    }

    /// Bit for this direction in a six-bit direction set.
    #[inline]
    pub fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = HexagonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(E),
            "SE" => Ok(SE),
            "SW" => Ok(SW),
            "W" => Ok(W),
            "NW" => Ok(NW),
            "NE" => Ok(NE),
            other => Err(HexagonyError::InvalidDirection(other.to_string())),
        }
    }
}
