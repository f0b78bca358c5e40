/// Error types for the groundwater level toolkit
use thiserror::Error;

/// Main error type for GWL operations
#[derive(Error, Debug, PartialEq)]
pub enum GwlError {
    /// Variable name is neither a known key nor a known CSV column
    #[error("Unknown water-level variable: {0}")]
    UnknownVariable(String),

    /// Required column absent from the CSV header
    #[error("CSV is missing required column: {0}")]
    MissingColumn(String),

    /// Remote bootstrap download failed
    #[error("Download failed: {0}")]
    Download(String),
}

/// Type alias for Results using GwlError
pub type Result<T> = std::result::Result<T, GwlError>;
