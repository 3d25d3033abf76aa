//! Error types for loam-core

use thiserror::Error;

/// Result type alias using loam-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in loam-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source bytes could not be decoded as a raster image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Selection offsets are out of bounds or not on character boundaries
    #[error("Invalid selection range {start}..{end} for buffer of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Backend transport or processing failure
    #[error("Backend error: {0}")]
    Backend(String),
}
