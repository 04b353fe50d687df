//! Error handling for Faust
//!
//! Rendering itself never fails. These errors cover the layers around it:
//! reading input, loading configuration and parsing step files.

use std::path::PathBuf;

use thiserror::Error;

/// Faust error type
#[derive(Debug, Error)]
pub enum FaustError {
    /// IO error (reading input, writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Malformed line in a step-by-step input
    #[error("Invalid step at line {line}: {message}")]
    InvalidStep { line: usize, message: String },

    /// Invalid option value
    #[error("Invalid option '{name}': {message}")]
    InvalidOption { name: String, message: String },
}

/// Result type for Faust operations
pub type FaustResult<T> = Result<T, FaustError>;

// Convenience constructors for errors
impl FaustError {
    pub fn invalid_step(line: usize, message: impl Into<String>) -> Self {
        FaustError::InvalidStep {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_option(name: impl Into<String>, message: impl Into<String>) -> Self {
        FaustError::InvalidOption {
            name: name.into(),
            message: message.into(),
        }
    }
}
