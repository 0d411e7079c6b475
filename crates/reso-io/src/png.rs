//! PNG image format support
//!
//! Circuits are stored as ordinary PNGs. Decoding normalises everything a
//! circuit might reasonably be saved as (truecolor, truecolor with alpha,
//! grayscale, or paletted) to the 8-bit RGB form the compiler consumes;
//! alpha is dropped and 16-bit channels keep their high byte. Encoding
//! always writes 8-bit RGB.

use crate::error::{IoError, IoResult};
use log::debug;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use reso_core::RgbImage;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = Decoder::new(reader);
    // Expand paletted and sub-byte images, strip 16-bit channels to 8
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after expansion: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            // EXPAND removes the palette; reaching this is a decoder bug
            return Err(IoError::UnsupportedFormat(
                "paletted PNG was not expanded".to_string(),
            ));
        }
    };

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let image = RgbImage::from_fn(width, height, |x, y| {
        let idx = (y as usize) * bytes_per_row + (x as usize) * samples;
        match samples {
            1 | 2 => {
                let gray = data[idx];
                (gray, gray, gray)
            }
            _ => (data[idx], data[idx + 1], data[idx + 2]),
        }
    })
    .map_err(IoError::Core)?;

    debug!(
        "decoded {}x{} PNG ({:?}, {} samples/pixel)",
        width, height, color_type, samples
    );
    Ok(image)
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(image: &RgbImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(image.as_raw())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}

/// Read a PNG image from a file path
pub fn load_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a PNG image to a file path
pub fn save_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(image, BufWriter::new(file))
}
