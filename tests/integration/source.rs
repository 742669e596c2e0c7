//! Integration tests for source layout utilities.
//!
//! Component: Source
//!
//! These tests verify:
//! - Hexagon sizing from program length
//! - Pretty layout and minification
//! - Resizing and resetting in the source's own style

#![cfg(test)]

use hexagony::core::{code_length, hexagon_size};
use hexagony::source::{count_bytes, count_codepoints, count_debug, count_operators, SourceGrid};

#[test]
fn size_grows_at_hexagonal_numbers() {
    let sizes: Vec<usize> = [1, 2, 7, 8, 19, 20, 37, 38].iter().map(|&n| hexagon_size(n)).collect();
    assert_eq!(sizes, vec![1, 2, 2, 3, 3, 4, 4, 5]);
    assert_eq!(code_length(5), 61);
}

#[test]
fn layout_is_a_hexagon() {
    // Arrange
    let grid = SourceGrid::parse(")))))!@");

    // Act
    let layout = grid.layout_code();

    // Assert
    assert_eq!(layout, "  ) )\n ) ) )\n  ! @");
    assert_eq!(SourceGrid::parse(&layout).rows(), grid.rows());
}

#[test]
fn layout_pads_missing_cells() {
    let grid = SourceGrid::parse("H;e;l;l;o");
    assert_eq!(grid.size(), 3);
    assert_eq!(
        grid.layout_code(),
        "   H ; e\n  ; l ; l\n ; o . . .\n  . . . .\n   . . ."
    );
}

#[test]
fn minify_round_trips_layout() {
    let laid_out = "  ) )\n ) ) )\n  ! @";
    let grid = SourceGrid::parse(laid_out);
    assert_eq!(grid.minify_code(), ")))))!@");
    assert_eq!(grid.to_string(), laid_out);
}

#[test]
fn minify_keeps_hexagon_size() {
    let grid = SourceGrid::parse("a.......");
    assert_eq!(grid.size(), 3);
    assert_eq!(grid.minify_code(), "a.......");
}

#[test]
fn resize_preserves_content_and_style() {
    // Arrange
    let minified = SourceGrid::parse(")))))!@");
    let laid_out = SourceGrid::parse("  ) )\n ) ) )\n  ! @");

    // Act
    let grown = minified.resize_code(3);
    let grown_layout = laid_out.resize_code(3);

    // Assert
    assert_eq!(SourceGrid::parse(&grown).size(), 3);
    assert!(!grown.contains('\n'));
    assert!(grown_layout.contains('\n'));
    assert_eq!(SourceGrid::parse(&grown).resize_code(2), ")))))!@");
}

#[test]
fn reset_clears_every_cell() {
    let grid = SourceGrid::parse("H;e;l;l;o");
    let reset = SourceGrid::parse(&grid.reset_code());
    assert_eq!(reset.size(), 3);
    assert!(reset.rows().iter().flatten().all(|&c| c == '.'));
}

#[test]
fn counting_helpers() {
    let code = "`)λ . ! @";
    assert_eq!(count_codepoints(code), 9);
    assert_eq!(count_bytes(code), 10);
    assert_eq!(count_debug(code), 1);
    assert_eq!(count_operators(code), 4);
}
