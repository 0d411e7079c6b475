//! reso-io - Image I/O for the Reso graphical logic simulator
//!
//! Circuits live on disk as PNG images; this crate decodes them into the
//! `(x, y)`-indexed [`RgbImage`](reso_core::RgbImage) the compiler takes
//! and encodes board state back out. Truecolor, alpha, grayscale, and
//! paletted PNGs are accepted on the way in (alpha dropped, palettes
//! expanded); output is always 8-bit RGB.

pub mod error;
pub mod png;

// Re-export core types
pub use reso_core;

pub use error::{IoError, IoResult};
pub use png::{load_image, read_png, save_image, write_png};
