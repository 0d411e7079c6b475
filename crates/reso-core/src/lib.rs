//! reso-core - Core data structures for the Reso graphical logic simulator
//!
//! This crate provides the types shared by the whole workspace:
//!
//! - **Palette** - Resel codes, their RGB values, and the per-palette role
//!   assignment (wire hues, logic elements, inert placeholders)
//! - **RgbImage** - The raw image a circuit is drawn in
//! - **ReselGrid** - The classified grid of resel codes
//! - **Error** - The core error type

pub mod error;
pub mod grid;
pub mod image;
pub mod palette;

pub use error::{Error, Result};
pub use grid::ReselGrid;
pub use image::RgbImage;
pub use palette::{Hue, Palette, Resel, Role};
