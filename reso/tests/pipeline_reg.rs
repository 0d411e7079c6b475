//! End-to-end pipeline regression test
//!
//! Draws a two-wire clock, pushes it through the full PNG round trip,
//! compiles, ticks, saves a frame, and recompiles the frame: the
//! recovered circuit must match the live one.

use reso::{Board, Palette, load_image, save_image};
use reso_test::image_from_ascii;
use std::fs;

#[test]
fn pipeline_reg() {
    let dir = std::env::temp_dir().join(format!("reso-pipeline-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let image = image_from_ascii(
        "
        RmMr
        R..r
        RMmr
        ",
    );
    let source = dir.join("clock.png");
    save_image(&image, &source).unwrap();

    // PNG round trip is exact
    let loaded = load_image(&source).unwrap();
    assert_eq!(loaded, image);

    let mut board = Board::new(loaded, Palette::Legacy).unwrap();
    assert!(board.wire_at(0, 0).unwrap().state);
    board.step();
    assert!(!board.wire_at(0, 0).unwrap().state);
    assert!(board.wire_at(3, 0).unwrap().state);

    // A saved frame compiles back to the same circuit state
    let frame = dir.join("frame1.png");
    save_image(board.image(), &frame).unwrap();
    let again = Board::new(load_image(&frame).unwrap(), Palette::Legacy).unwrap();
    assert_eq!(again.wires(), board.wires());
    assert_eq!(again.region_map().len(), board.region_map().len());

    fs::remove_dir_all(&dir).ok();
}
