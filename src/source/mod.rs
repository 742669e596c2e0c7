//! Source code handling for Hexagony.
//!
//! A program is a flat string. Whitespace and the debug marker (a backtick)
//! are ignored when sizing the hexagon; every other character occupies one
//! cell in row-major order over the hexagon's rows. Missing cells are padded
//! with the no-op `.`.
//!
//! Whitespace and debug markers are not thrown away: each cell remembers the
//! characters that preceded it (its *prefix*), which lets the layout
//! utilities reproduce the author's formatting and lets the engine tell which
//! cells were flagged for debugging.
//!
//! # Layer 1 - depends on core

use std::fmt;

use crate::core::{AxialPoint, HexResult, code_length, hexagon_size, row_count, row_size, to_index};

/// Marks the following cell as a debug cell.
pub const DEBUG_MARKER: char = '`';

/// The no-op opcode used for padding.
pub const NOP: char = '.';

/// True for the characters skipped when sizing a program.
pub fn is_whitespace_or_debug(c: char) -> bool {
    matches!(c, DEBUG_MARKER | ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn is_layout_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn remove_whitespace(code: &str) -> String {
    code.chars().filter(|&c| !is_layout_whitespace(c)).collect()
}

pub fn remove_whitespace_and_debug(code: &str) -> String {
    code.chars().filter(|&c| !is_whitespace_or_debug(c)).collect()
}

pub fn contains_whitespace(code: &str) -> bool {
    code.chars().any(is_layout_whitespace)
}

pub fn count_codepoints(code: &str) -> usize {
    code.chars().count()
}

pub fn count_bytes(code: &str) -> usize {
    code.len()
}

/// Number of debug markers.
pub fn count_debug(code: &str) -> usize {
    code.chars().filter(|&c| c == DEBUG_MARKER).count()
}

/// Number of opcodes other than `.`.
pub fn count_operators(code: &str) -> usize {
    code.chars().filter(|&c| !is_whitespace_or_debug(c) && c != NOP).count()
}

/// The hexagon-shaped table of opcodes for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGrid {
    size: usize,
    grid: Vec<Vec<char>>,
    /// Whitespace and debug markers that preceded each cell.
    prefixes: Vec<Vec<String>>,
}

impl SourceGrid {
    /// Lay a flat program out on the smallest hexagon that fits it.
    pub fn parse(code: &str) -> Self {
        let size = hexagon_size(count_codepoints(&remove_whitespace_and_debug(code)));
        let mut chars = code.chars().peekable();
        let mut grid = Vec::with_capacity(row_count(size));
        let mut prefixes = Vec::with_capacity(row_count(size));

        for i in 0..row_count(size) {
            let mut row = Vec::with_capacity(row_size(size, i));
            let mut prefix_row = Vec::with_capacity(row_size(size, i));
            for _ in 0..row_size(size, i) {
                let mut prefix = String::new();
                while let Some(c) = chars.next_if(|&c| is_whitespace_or_debug(c)) {
                    prefix.push(c);
                }
                row.push(chars.next().unwrap_or(NOP));
                prefix_row.push(prefix);
            }
            grid.push(row);
            prefixes.push(prefix_row);
        }

        SourceGrid { size, grid, prefixes }
    }

    /// An all-`.` program of the given size.
    pub fn empty(size: usize) -> Self {
        let size = size.max(1);
        let grid = (0..row_count(size)).map(|i| vec![NOP; row_size(size, i)]).collect();
        let prefixes = (0..row_count(size)).map(|i| vec![String::new(); row_size(size, i)]).collect();
        SourceGrid { size, grid, prefixes }
    }

    /// Edge length of the hexagon.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.grid
    }

    /// Opcode at grid indices, or `None` outside the table.
    pub fn get(&self, i: usize, j: usize) -> Option<char> {
        self.grid.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Opcode at an axial point.
    pub fn instruction_at(&self, point: AxialPoint) -> HexResult<char> {
        let (i, j) = to_index(self.size, point)?;
        Ok(self.grid[i][j])
    }

    /// True when the cell was preceded by a debug marker.
    pub fn is_debug(&self, i: usize, j: usize) -> bool {
        self.prefixes
            .get(i)
            .and_then(|row| row.get(j))
            .is_some_and(|prefix| prefix.contains(DEBUG_MARKER))
    }

    /// True when any cell prefix contains layout whitespace.
    pub fn contains_whitespace(&self) -> bool {
        self.prefixes.iter().flatten().any(|prefix| contains_whitespace(prefix))
    }

    fn to_string_internal(&self) -> String {
        let mut result = String::new();
        for (row, prefix_row) in self.grid.iter().zip(&self.prefixes) {
            for (c, prefix) in row.iter().zip(prefix_row) {
                result.push_str(prefix);
                result.push(*c);
            }
        }
        result
    }

    /// Strip whitespace and trailing no-ops, keeping enough cells that the
    /// hexagon size does not shrink.
    pub fn minify_code(&self) -> String {
        let minimum_length = code_length(self.size - 1) + 1;
        let stripped = remove_whitespace(&self.to_string_internal());
        let mut result = stripped.trim_end_matches(NOP).to_string();
        let length = count_codepoints(&result) - count_debug(&result);
        if length < minimum_length {
            result.extend(std::iter::repeat(NOP).take(minimum_length - length));
        }
        result
    }

    /// Pretty-print the program as a hexagon.
    pub fn layout_code(&self) -> String {
        let rows = row_count(self.size);
        let mut lines = Vec::with_capacity(rows);
        for (i, (row, prefix_row)) in self.grid.iter().zip(&self.prefixes).enumerate() {
            let mut line = " ".repeat(rows - row_size(self.size, i));
            for (c, prefix) in row.iter().zip(prefix_row) {
                let kept = remove_whitespace(prefix);
                line.push_str(if kept.is_empty() { " " } else { &kept });
                line.push(*c);
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Render in the style of this program: laid out if it had whitespace,
    /// minified otherwise.
    fn render_like(&self, other: &SourceGrid) -> String {
        if self.contains_whitespace() {
            other.layout_code()
        } else {
            other.minify_code()
        }
    }

    /// Grow or shrink the hexagon to `new_size`, one ring at a time.
    ///
    /// Rows in the bottom half are shifted one cell per ring so that mirrors
    /// keep their relative alignment.
    pub fn resize_code(&self, new_size: usize) -> String {
        let new_size = new_size.max(1);
        let mut resized = self.clone();
        while resized.size < new_size {
            resized = resized.grown();
        }
        while resized.size > new_size {
            resized = resized.shrunk();
        }
        self.render_like(&resized)
    }

    /// Replace every cell with `.`, keeping the size and style.
    pub fn reset_code(&self) -> String {
        self.render_like(&SourceGrid::empty(self.size))
    }

    fn grown(&self) -> SourceGrid {
        let size = self.size + 1;
        let mut grid = Vec::with_capacity(row_count(size));
        let mut prefixes = Vec::with_capacity(row_count(size));

        for (i, (row, prefix_row)) in self.grid.iter().zip(&self.prefixes).enumerate() {
            let mut new_row = Vec::with_capacity(row_size(size, i));
            let mut new_prefixes = Vec::with_capacity(row_size(size, i));
            if i >= self.size {
                new_row.push(NOP);
                new_prefixes.push(String::new());
            }
            new_row.extend_from_slice(row);
            new_prefixes.extend(prefix_row.iter().cloned());
            new_row.resize(row_size(size, i), NOP);
            new_prefixes.resize(row_size(size, i), String::new());
            grid.push(new_row);
            prefixes.push(new_prefixes);
        }
        for i in self.grid.len()..row_count(size) {
            grid.push(vec![NOP; row_size(size, i)]);
            prefixes.push(vec![String::new(); row_size(size, i)]);
        }

        SourceGrid { size, grid, prefixes }
    }

    fn shrunk(&self) -> SourceGrid {
        let size = self.size - 1;
        let mut grid = Vec::with_capacity(row_count(size));
        let mut prefixes = Vec::with_capacity(row_count(size));

        for i in 0..row_count(size) {
            let length = row_size(size, i);
            let offset = if i >= size { 1 } else { 0 };
            grid.push(self.grid[i][offset..offset + length].to_vec());
            prefixes.push(self.prefixes[i][offset..offset + length].to_vec());
        }

        SourceGrid { size, grid, prefixes }
    }
}

impl fmt::Display for SourceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_string_internal();
        if contains_whitespace(&text) {
            f.write_str(&text)
        } else {
            f.write_str(&self.minify_code())
        }
    }
}
