//! Error types for the recipe-model crate.
//!
//! Every fallible operation here happens at the input boundary: reading
//! recipe/profile files and validating the numbers inside them. Once a
//! `Recipe` or `UserProfile` exists, scoring it cannot fail.

use thiserror::Error;

/// Errors that can occur while loading or validating recipe data
#[derive(Error, Debug)]
pub enum ModelError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input was not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A numeric field was negative, NaN or infinite
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A string did not name any variant of an enumerated field
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
