//! Error types for the slicer.

use thiserror::Error;

/// Errors that can occur during slicing.
#[derive(Error, Debug)]
pub enum SlicerError {
    /// Invalid slice settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for slicer operations.
pub type Result<T> = std::result::Result<T, SlicerError>;
