//! Error types for puzzleseg-segment

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error)]
pub enum SegError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] puzzleseg_core::Error),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The page did not contain both a word list and a grid
    #[error("not enough components: found {found} macro region(s), need 2")]
    InsufficientMacroRegions { found: usize },

    /// Configuration file could not be read
    #[error("failed to read config '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for segmentation operations
pub type SegResult<T> = Result<T, SegError>;

/// Check that `value` lies in `[lo, hi]`.
pub(crate) fn check_range(name: &str, value: f64, lo: f64, hi: f64) -> SegResult<()> {
    if !(lo..=hi).contains(&value) {
        return Err(SegError::InvalidParameter(format!(
            "{name} must be between {lo} and {hi}, got {value}"
        )));
    }
    Ok(())
}
