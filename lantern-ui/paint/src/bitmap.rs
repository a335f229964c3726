//! Bitmap decoding, bilinear scaling and placeholder generation.

use std::io::Cursor;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::PaintError;

const PLACEHOLDER_FILL: Rgba<u8> = Rgba([60, 60, 60, 255]);
const PLACEHOLDER_BORDER: Rgba<u8> = Rgba([100, 100, 100, 255]);

/// Decode an image file into RGBA pixels.
pub fn load(path: &Path) -> Result<RgbaImage, PaintError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

/// Decode in-memory image bytes into RGBA pixels.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, PaintError> {
    let image = image::load_from_memory(bytes)?.into_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(PaintError::Empty);
    }
    Ok(image)
}

/// Scale `source` to exactly `width`×`height` with bilinear filtering.
pub fn scale_bilinear(
    source: &RgbaImage,
    width: u32,
    height: u32,
) -> RgbaImage {
    if source.width() == width && source.height() == height {
        return source.clone();
    }
    imageops::resize(source, width, height, FilterType::Triangle)
}

/// Procedural square icon: a dark fill with a one pixel lighter border.
pub fn placeholder_icon(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let edge = size.saturating_sub(1);
        if x == 0 || y == 0 || x == edge || y == edge {
            PLACEHOLDER_BORDER
        } else {
            PLACEHOLDER_FILL
        }
    })
}

/// Encode RGBA pixels as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, PaintError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
