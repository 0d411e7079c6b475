//! reso-test - Test support for the Reso workspace
//!
//! Circuits under test are written as ASCII diagrams instead of checked-in
//! image files, so the test source shows the circuit. Each character is one
//! pixel: a palette letter (`R`, `r`, `B`, `b`, `m`, `M`, ...) maps to that
//! resel's RGB value, and `.` is an unclassified black pixel.
//!
//! ```
//! use reso_test::image_from_ascii;
//!
//! let image = image_from_ascii(
//!     "
//!     RmM.
//!     ...b
//!     ",
//! );
//! assert_eq!(image.width(), 4);
//! assert_eq!(image.height(), 2);
//! assert_eq!(image.get(0, 0), Some((255, 0, 0)));
//! ```

use reso_core::{Resel, ReselGrid, RgbImage};

/// Parse an ASCII diagram into an RGB image.
///
/// Lines are trimmed; blank lines are skipped; short lines are padded with
/// black pixels on the right.
///
/// # Panics
///
/// Panics on a character that is neither a palette letter nor `.`; a
/// malformed diagram is a broken test.
pub fn image_from_ascii(art: &str) -> RgbImage {
    let rows = diagram_rows(art);
    let height = rows.len() as u32;
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as u32;

    RgbImage::from_fn(width, height, |x, y| {
        match rows[y as usize].get(x as usize).copied() {
            None | Some(b'.') => (0, 0, 0),
            Some(byte) => Resel::from_ascii(byte)
                .and_then(Resel::rgb)
                .unwrap_or_else(|| panic!("not a palette letter: {:?}", byte as char)),
        }
    })
    .expect("diagram dimensions fit in memory")
}

/// Parse an ASCII diagram straight into a resel grid.
///
/// Same format as [`image_from_ascii`].
pub fn grid_from_ascii(art: &str) -> ReselGrid {
    ReselGrid::from_image(&image_from_ascii(art))
}

fn diagram_rows(art: &str) -> Vec<&[u8]> {
    art.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::as_bytes)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_from_ascii() {
        let image = image_from_ascii(
            "
            Rm.
            .bB
            ",
        );
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get(0, 0), Some((255, 0, 0)));
        assert_eq!(image.get(1, 0), Some((128, 0, 128)));
        assert_eq!(image.get(2, 0), Some((0, 0, 0)));
        assert_eq!(image.get(1, 1), Some((0, 0, 128)));
        assert_eq!(image.get(2, 1), Some((0, 0, 255)));
    }

    #[test]
    fn test_grid_from_ascii() {
        let grid = grid_from_ascii("RrB");
        assert_eq!(grid.get(0, 0), Some(Resel::Red));
        assert_eq!(grid.get(1, 0), Some(Resel::RedDark));
        assert_eq!(grid.get(2, 0), Some(Resel::Blue));
    }

    #[test]
    fn test_short_lines_pad_with_black() {
        let image = image_from_ascii(
            "
            RR
            R
            ",
        );
        assert_eq!(image.width(), 2);
        assert_eq!(image.get(1, 1), Some((0, 0, 0)));
    }
}
