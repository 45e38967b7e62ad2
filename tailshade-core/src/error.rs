//! Palette engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    /// Input is not `#` followed by exactly six hex digits.
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),

    #[error("Invalid config format: {0}")]
    InvalidConfigFormat(#[from] serde_json::Error),
}
