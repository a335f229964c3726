use std::io;
use std::path::PathBuf;

use lantern_ui_paint::PaintError;
use thiserror::Error;

/// Errors raised while discovering or decoding screenshots.
#[derive(Debug, Error)]
pub(crate) enum CarouselError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: PaintError,
    },
}
