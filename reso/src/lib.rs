//! Reso - a graphical logic simulator whose circuits are PNG images
//!
//! Pixels of specific colors denote wires and logic elements; contiguous
//! same-color regions are the circuit's components, and adjacency between
//! regions is its wiring. Each tick moves boolean state across that graph
//! and, optionally, repaints the image to show which wires are energised.
//!
//! # Overview
//!
//! - [`load_image`] / [`save_image`] - PNG in, PNG out
//! - [`Board::new`] - compile an image under a [`Palette`]
//! - [`Board::iterate`] - run one logic tick
//! - [`Board::image`] / [`Board::resel_map`] - observe the result
//!
//! # Example
//!
//! ```
//! use reso::{Board, Palette, RgbImage};
//!
//! // An energised red wire feeding an input node
//! let image = RgbImage::from_fn(2, 1, |x, _| match x {
//!     0 => (255, 0, 0),
//!     _ => (128, 0, 128),
//! })
//! .unwrap();
//! let mut board = Board::new(image, Palette::Legacy).unwrap();
//! board.step();
//! assert!(!board.wire_at(0, 0).unwrap().state);
//! ```

// Re-export the member crates' public surface
pub use reso_board::{Board, BoardError, BoardResult, Node, NodeKind, NodeState, Wire};
pub use reso_core::{Error, Hue, Palette, Resel, ReselGrid, Result, RgbImage, Role};
pub use reso_io::{IoError, IoResult, load_image, read_png, save_image, write_png};
pub use reso_region::{
    DIAG, MapperOptions, ORTHO, ORTHO_DIAG, Region, RegionError, RegionMap, RegionResult,
    map_regions,
};
