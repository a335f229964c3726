use thiserror::Error;

/// Errors emitted while reading or writing the launcher settings file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
