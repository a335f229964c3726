use thiserror::Error;

/// Errors emitted while decoding or encoding bitmaps.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("image I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("image codec failed: {0}")]
    Codec(#[from] image::ImageError),
    #[error("image has no pixels")]
    Empty,
}
