//! Error types for mh-core

use thiserror::Error;

/// Core error type for migrate-helper
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Invalid user input (name, sub-directory, category selection)
    #[error("[E001] Invalid input: {message}")]
    InvalidInput { message: String },

    /// E002: Directory creation or file write failed
    #[error("[E002] Filesystem error at '{path}'")]
    Filesystem {
        path: String,
        source: std::io::Error,
    },

    /// E003: Text contains a character outside ISO-8859-1
    #[error("[E003] Cannot encode {character:?} at position {position} as ISO-8859-1")]
    Encoding { character: char, position: usize },

    /// E004: Interactive input could not be read
    #[error("[E004] Failed to read input for '{prompt}': {message}")]
    Input { prompt: String, message: String },

    /// E005: Configuration file not found
    #[error("[E005] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E006: Failed to parse configuration file
    #[error("[E006] Failed to parse config")]
    ConfigParse(#[from] serde_yaml::Error),

    /// E007: Invalid configuration value
    #[error("[E007] Invalid config: {message}")]
    ConfigInvalid { message: String },
}

impl CoreError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn filesystem(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
