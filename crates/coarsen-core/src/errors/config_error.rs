//! Configuration errors.

use super::error_code::{self, CoarsenErrorCode};

/// Errors raised while loading, merging, or validating configuration.
/// All of them are raised before any graph computation starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Missing required option: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Sizes of {left} ({left_len}) and {right} ({right_len}) do not match")]
    LengthMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    #[error("Unknown matching method '{0}' (expected one of: hem, lem, rm)")]
    UnknownMatching(String),

    #[error("Unknown similarity measure '{name}' (expected one of: {expected})")]
    UnknownSimilarity { name: String, expected: String },

    #[error("Unsupported output format '{0}' (expected one of: ncol, gml, pajek)")]
    UnknownFormat(String),
}

impl CoarsenErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMatching(_) | Self::UnknownSimilarity { .. } | Self::UnknownFormat(_) => {
                error_code::UNKNOWN_NAME
            }
            _ => error_code::CONFIG_ERROR,
        }
    }
}
