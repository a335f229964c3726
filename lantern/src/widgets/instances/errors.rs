use std::io;
use std::path::PathBuf;

use lantern_ui_paint::PaintError;
use thiserror::Error;

/// Errors raised by instance icon operations.
///
/// The display strings of the user-facing variants are shown verbatim in
/// the error dialog.
#[derive(Debug, Error)]
pub(crate) enum IconError {
    #[error("Could not read image file.")]
    Read {
        path: PathBuf,
        #[source]
        source: PaintError,
    },
    #[error("Failed to save icon: {0}")]
    Save(String),
    #[error("Failed to delete icon file.")]
    Delete(#[source] io::Error),
    #[error("failed to decode icon {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: PaintError,
    },
}
