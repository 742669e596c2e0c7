//! Integration tests for whole programs.
//!
//! Component: Engine (`Hexagony` facade)
//!
//! These tests verify:
//! - Termination and tick counting
//! - Arithmetic on arbitrary-precision memory edges
//! - Mirrors, branches, and instruction pointer switching
//! - Mid-run source and input replacement

#![cfg(test)]

use crate::common::*;

use hexagony::*;

// =============================================================================
// Termination
// =============================================================================

mod termination {
    use super::*;

    #[test]
    fn at_sign_alone_stops_after_one_tick() {
        // Arrange & Act
        let (program, outcome) = run("@", "");

        // Assert
        assert_terminated(&outcome);
        assert_eq!(program.ticks(), 1);
        assert!(program.output().is_empty());
    }

    #[test]
    fn division_by_zero_is_a_terminal_state() {
        // Arrange & Act
        let (program, outcome) = run(":!@", "");

        // Assert: stopped on the first cell without printing
        assert_division_by_zero(&outcome);
        assert_eq!(program.termination_reason().map(|r| r.as_str()), Some("division by zero"));
        assert_eq!(program.ticks(), 1);
        assert_eq!(program.coords(), AxialPoint::new(0, -1));
    }

    #[test]
    fn modulo_by_zero_is_a_terminal_state() {
        let (_, outcome) = run("%", "");
        assert_division_by_zero(&outcome);
    }

    #[test]
    fn endless_program_hits_tick_limit() {
        // Arrange & Act
        let (program, outcome) = run_with_limit(".", "", 250);

        // Assert
        assert_tick_limit(&outcome);
        assert_eq!(program.ticks(), 250);
        assert_eq!(program.termination_reason(), None);
    }

    #[test]
    fn steps_after_termination_change_nothing() {
        // Arrange
        let (mut program, _) = run("H;@", "");
        let before = program.clone();

        // Act
        for _ in 0..5 {
            program.step().unwrap();
        }

        // Assert
        assert_eq!(program.ticks(), before.ticks());
        assert_eq!(program.output(), before.output());
        assert_eq!(program.memory(), before.memory());
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

mod arithmetic {
    use super::*;

    #[test]
    fn increments_then_prints() {
        let (program, outcome) = run(")))))!@", "");
        assert_terminated(&outcome);
        assert_output(&program, "5");
    }

    #[test]
    fn digits_build_decimal_literal() {
        let (program, _) = run("12345!@", "");
        assert_output(&program, "12345");
    }

    #[test]
    fn letters_print_as_bytes() {
        // Arrange: IP 0 visits cells 0-2, 7-11, then 16-17 on a size 3 hexagon.
        let source = "H;e....;l;;o....;@";

        // Act
        let (program, outcome) = run(source, "");

        // Assert
        assert_terminated(&outcome);
        assert_output(&program, "Hello");
    }

    #[test]
    fn adds_two_integers_from_input() {
        // Arrange: read into the left and right neighbours, then add.
        let source = "{?\"....}?'+!....@";

        // Act
        let (program, outcome) = run(source, "3 4");

        // Assert
        assert_terminated(&outcome);
        assert_output(&program, "7");
    }

    #[test]
    fn multiplies_beyond_machine_integers() {
        let source = "{?\"....}?'*!....@";
        let (program, _) = run(source, "123456789123 987654321987");
        assert_output(&program, "121932631355968601347401");
    }

    #[test]
    fn floor_division_rounds_towards_negative_infinity() {
        for (source, expected) in [(":!@", "-4"), ("%!@", "1")] {
            // Arrange
            let mut program = Hexagony::new(source, "");
            let mp = program.memory().pointer();
            program.set_memory_value(mp.left().key(), Value::from(-7));
            program.set_memory_value(mp.right().key(), Value::from(2));

            // Act
            let outcome = program.run(&RunConfig::default()).unwrap();

            // Assert
            assert_terminated(&outcome);
            assert_output(&program, expected);
        }
    }

    #[test]
    fn debug_marker_does_not_change_behavior() {
        let (plain, _) = run(")))))!@", "");
        let (marked, _) = run("`)))`))!`@", "");
        assert_eq!(plain.output(), marked.output());
        assert_eq!(plain.ticks(), marked.ticks());
    }

    #[test]
    fn whitespace_layout_runs_like_minified() {
        let (plain, _) = run(")))))!@", "");
        let (laid_out, _) = run("  ) )\n ) ) )\n  ! @\n", "");
        assert_eq!(plain.output(), laid_out.output());
    }
}

// =============================================================================
// Control Flow
// =============================================================================

mod control_flow {
    use super::*;

    #[test]
    fn backslash_turns_east_into_southwest() {
        // Arrange: without the mirror the IP would hit `)` next.
        let mut program = Hexagony::new(".\\)@...", "");

        // Act
        let outcome = program.run(&RunConfig::default()).unwrap();

        // Assert
        assert_terminated(&outcome);
        assert_eq!(program.ticks(), 3);
        assert_eq!(program.coords(), AxialPoint::new(0, 0));
        assert_current_value(&program, 0);
    }

    #[test]
    fn pipe_sends_ip_back_west() {
        let (program, outcome) = run("|...@..", "");
        assert_terminated(&outcome);
        assert_eq!(program.ticks(), 2);
        assert_eq!(program.coords(), AxialPoint::new(1, 0));
    }

    #[test]
    fn less_than_branches_on_sign() {
        // Positive: E turns SE.
        let (program, _) = run(")<..@..", "");
        assert_eq!(program.coords(), AxialPoint::new(1, 0));
        assert_eq!(program.ticks(), 3);

        // Zero: E turns NE and leaves through the top-right corner.
        let mut program = Hexagony::new(".<@....", "");
        let edges = collect_edges(&mut program, 3);
        assert_eq!(edges, vec!["1,-1,NE,-"]);
        assert!(program.is_terminated());
        assert_eq!(program.coords(), AxialPoint::new(-1, 0));
    }

    #[test]
    fn skip_jumps_over_one_cell() {
        let (program, _) = run("$)@....", "");
        assert_eq!(program.ticks(), 2);
        assert_current_value(&program, 0);
    }

    #[test]
    fn reverse_halt_leaves_ip_where_it_was() {
        // Arrange: walking west from the start wraps onto `@` at (1,0).
        let mut program = Hexagony::new("....@..", "");
        program.set_reverse(true);

        // Act
        let edges = collect_edges(&mut program, 1);

        // Assert
        assert!(program.is_terminated());
        assert_eq!(edges, vec!["0,-1,W,0"]);
        assert_eq!(program.coords(), AxialPoint::new(0, -1));
        assert_eq!(program.dir(), Direction::E);
    }

    #[test]
    fn ips_take_turns_round_robin() {
        // Arrange
        let mut program = Hexagony::new("]]]]]]]", "");

        // Act & Assert
        for tick in 1..=12 {
            program.step().unwrap();
            assert_eq!(program.active_ip(), tick % 6);
        }
    }

    #[test]
    fn initial_ips_start_at_corners() {
        let program = Hexagony::new("...................", "");
        let corners: Vec<(i64, i64, Direction)> = program
            .ips()
            .iter()
            .map(|ip| (ip.coords.q, ip.coords.r, ip.dir))
            .collect();
        assert_eq!(
            corners,
            vec![
                (0, -2, Direction::E),
                (2, -2, Direction::SE),
                (2, 0, Direction::SW),
                (0, 2, Direction::W),
                (-2, 2, Direction::NW),
                (-2, 0, Direction::NE),
            ]
        );
    }

    #[test]
    fn hash_selects_ip_from_memory() {
        let mut program = Hexagony::new("8#.....", "");
        program.step().unwrap();
        program.step().unwrap();
        // The digit sets the edge to 8, and 8 mod 6 = 2.
        assert_eq!(program.active_ip(), 2);
    }
}

// =============================================================================
// Mid-run Changes
// =============================================================================

mod mid_run {
    use super::*;

    #[test]
    fn source_replacement_keeps_state() {
        // Arrange
        let mut program = Hexagony::new(")))....", "");
        program.step().unwrap();
        program.step().unwrap();

        // Act
        program.set_source_code("..!@...").unwrap();
        program.run(&RunConfig::default()).unwrap();

        // Assert: two increments survived the swap.
        assert_output(&program, "2");
    }

    #[test]
    fn source_replacement_rejects_new_size() {
        let mut program = Hexagony::new(")))....", "");
        let err = program.set_source_code("@").unwrap_err();
        assert_eq!(err, HexagonyError::SizeMismatch { expected: 2, found: 1 });
        assert_eq!(err.category(), ErrorCategory::Source);
    }

    #[test]
    fn input_can_be_extended() {
        // Arrange
        let mut program = Hexagony::new(",;,;@", "a");
        program.step().unwrap();
        program.step().unwrap();

        // Act
        program.set_input("ab");
        program.run(&RunConfig::default()).unwrap();

        // Assert
        assert_output(&program, "ab");
    }
}
