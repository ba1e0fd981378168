//! Error types for the tether generator.

use thiserror::Error;

use crate::diagnostics::Diagnostics;

/// Errors that can occur during code generation.
///
/// Problems inside a descriptor (bad contracts, collisions) are not errors
/// at this level; they accumulate in [`Diagnostics`] and only surface here,
/// all at once, through [`GeneratorError::Diagnostics`].
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A descriptor file could not be read
    #[error("Failed to read descriptor '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A descriptor file is not valid Rust, or a marker attribute is malformed
    #[error("Failed to parse descriptor '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The descriptor produced one or more configuration or resolution errors.
    #[error("{0}")]
    Diagnostics(Diagnostics),
}
