//! Logic regression tests
//!
//! End-to-end circuit behaviour over whole ticks: a two-wire clock, OR
//! fan-in, XOR and AND truth tables, inert constancy, and the boundary
//! behaviours of undriven wires and starved logic nodes.

use reso_board::Board;
use reso_core::{Palette, Resel};
use reso_test::image_from_ascii;

fn board_from(art: &str) -> Board {
    Board::new(image_from_ascii(art), Palette::Legacy).unwrap()
}

#[test]
fn logic_reg_clock() {
    // Ring oscillator: the left red wire drives the right one through
    // the top input/output pair, and the right one drives it back
    // through the bottom pair. One wire starts energised.
    let mut board = board_from(
        "
        RmMr
        R..r
        RMmr
        ",
    );
    assert!(board.wire_at(0, 0).unwrap().state);
    assert!(!board.wire_at(3, 0).unwrap().state);

    for tick in 0..6 {
        board.iterate(false, false);
        let odd = tick % 2 == 0;
        assert_eq!(board.wire_at(0, 0).unwrap().state, !odd, "tick {tick}");
        assert_eq!(board.wire_at(3, 0).unwrap().state, odd, "tick {tick}");
    }
}

#[test]
fn logic_reg_or_fanin() {
    // Two red wires, each with its own input, both inputs on one output
    // feeding a blue wire: the blue wire ORs them.
    for (a, b, expect) in [
        (false, false, false),
        (true, false, true),
        (false, true, true),
        (true, true, true),
    ] {
        let art = format!(
            "
            {}m..
            .Mb.
            {}m..
            ",
            if a { 'R' } else { 'r' },
            if b { 'R' } else { 'r' },
        );
        let mut board = board_from(&art);
        board.iterate(false, false);
        assert_eq!(
            board.wire_at(2, 1).unwrap().state,
            expect,
            "OR({a}, {b})"
        );
    }
}

#[test]
fn logic_reg_xor_gate() {
    for (a, b, expect) in [
        (false, false, false),
        (true, false, true),
        (false, true, true),
        // Two true inputs cancel
        (true, true, false),
    ] {
        let art = format!(
            "
            {}m..
            .CMb
            {}m..
            ",
            if a { 'R' } else { 'r' },
            if b { 'R' } else { 'r' },
        );
        let mut board = board_from(&art);
        board.iterate(false, false);
        assert_eq!(
            board.wire_at(3, 1).unwrap().state,
            expect,
            "XOR({a}, {b})"
        );
    }
}

#[test]
fn logic_reg_and_gate() {
    for (a, b, expect) in [
        (false, false, false),
        // One false input latches the node off
        (true, false, false),
        (false, true, false),
        (true, true, true),
    ] {
        let art = format!(
            "
            {}m..
            .cMb
            {}m..
            ",
            if a { 'R' } else { 'r' },
            if b { 'R' } else { 'r' },
        );
        let mut board = board_from(&art);
        board.iterate(false, false);
        assert_eq!(
            board.wire_at(3, 1).unwrap().state,
            expect,
            "AND({a}, {b})"
        );
    }
}

#[test]
fn logic_reg_inert_image_is_constant() {
    let art = "
        G.Y
        .g.
        Y.G
        ";
    let mut board = board_from(art);
    let original = board.image().clone();
    for _ in 0..3 {
        board.step();
        assert_eq!(board.image(), &original);
    }
}

#[test]
fn logic_reg_undriven_wire_goes_dark() {
    // No output feeds either wire, so both decay after one tick, input
    // or no input.
    let mut board = board_from("R.Rm");
    assert!(board.wire_at(0, 0).unwrap().state);
    assert!(board.wire_at(2, 0).unwrap().state);

    board.iterate(false, false);
    assert!(!board.wire_at(0, 0).unwrap().state);
    assert!(!board.wire_at(2, 0).unwrap().state);
}

#[test]
fn logic_reg_and_with_no_inputs_does_not_fire() {
    // The AND node touches only the output; it sees no input this tick
    // and must stay quiet.
    let mut board = board_from("cMb");
    board.iterate(false, false);
    assert!(!board.wire_at(2, 0).unwrap().state);
}

#[test]
fn logic_reg_diagonal_wire_runs() {
    // Two diagonal red runs: eight-way contiguity holds each run
    // together while the two king-move gap keeps them apart.
    let board = board_from(
        "
        R..r..
        .R..r.
        ..R..r
        ",
    );
    assert_eq!(
        board.region_map().regions_with_class(Resel::Red).len(),
        2
    );
    assert_eq!(board.wires().len(), 2);
    let on: Vec<bool> = board.wires().iter().map(|w| w.state).collect();
    assert_eq!(on.iter().filter(|s| **s).count(), 1);
}

#[test]
fn logic_reg_extended_palette_clock() {
    // The same ring as logic_reg_clock in the extended palette: orange
    // wire, purple ports.
    let image = image_from_ascii(
        "
        OpPo
        O..o
        OPpo
        ",
    );
    let mut board = Board::new(image, Palette::Extended).unwrap();
    assert!(board.wire_at(0, 0).unwrap().state);

    board.iterate(false, false);
    assert!(!board.wire_at(0, 0).unwrap().state);
    assert!(board.wire_at(3, 0).unwrap().state);

    board.iterate(false, false);
    assert!(board.wire_at(0, 0).unwrap().state);
    assert!(!board.wire_at(3, 0).unwrap().state);
}
