//! Resel grid
//!
//! [`ReselGrid`] is the classified form of an image: a width × height grid
//! of [`Resel`] codes, indexed `(x, y)` like [`RgbImage`]. Pixels whose RGB
//! value is outside the palette classify as [`Resel::Empty`] and take no
//! part in the circuit.

use crate::error::{Error, Result};
use crate::image::RgbImage;
use crate::palette::Resel;

/// A width × height grid of resel codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReselGrid {
    width: u32,
    height: u32,
    cells: Vec<Resel>,
}

impl ReselGrid {
    /// Create a grid of [`Resel::Empty`] cells.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Resel::Empty; len],
        })
    }

    /// Classify every pixel of an image.
    pub fn from_image(image: &RgbImage) -> Self {
        let width = image.width();
        let height = image.height();
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                // get() is in-bounds by construction here
                let (r, g, b) = image.get(x, y).unwrap_or((0, 0, 0));
                cells.push(Resel::from_rgb(r, g, b));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The code at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Resel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    /// Overwrite the code at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, code: Resel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.cells[idx] = code;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
