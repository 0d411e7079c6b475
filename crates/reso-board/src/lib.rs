//! reso-board - Circuit compilation and simulation for Reso
//!
//! A Reso circuit is an image. This crate provides the [`Board`]: the
//! compiled form of such an image and the engine that steps it.
//!
//! - **Compilation** - [`Board::new`] classifies pixels, maps them into
//!   regions (via `reso-region`), and builds the typed wire/node graph
//! - **Simulation** - [`Board::iterate`] runs one four-phase logic tick
//! - **Rendering** - [`Board::render`] writes wire states back into the
//!   resel grid and the image
//!
//! ```
//! use reso_board::Board;
//! use reso_core::{Palette, Resel, RgbImage};
//!
//! // A three-pixel circuit: an energised red wire feeding an input
//! let image = RgbImage::from_fn(3, 1, |x, _| match x {
//!     0 => (255, 0, 0),
//!     1 => (128, 0, 128),
//!     _ => (0, 0, 0),
//! })
//! .unwrap();
//! let mut board = Board::new(image, Palette::Legacy).unwrap();
//! assert!(board.wire_at(0, 0).unwrap().state);
//!
//! // No output feeds the wire, so it goes dark on the next tick
//! board.step();
//! assert!(!board.wire_at(0, 0).unwrap().state);
//! assert_eq!(board.resel_map().get(0, 0), Some(Resel::RedDark));
//! ```

pub mod board;
pub mod error;
mod render;
mod sim;

// Re-export core types
pub use reso_core;
pub use reso_region;

pub use board::{Board, Node, NodeKind, NodeState, Wire};
pub use error::{BoardError, BoardResult};
