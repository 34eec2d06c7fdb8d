//! Top-level error aggregating every subsystem.

use super::error_code::CoarsenErrorCode;
use super::{ConfigError, FormatError, GraphError};

/// Errors that can occur during a coarsening run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CoarsenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

pub type CoarsenResult<T> = Result<T, CoarsenError>;

impl CoarsenErrorCode for CoarsenError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Format(e) => e.error_code(),
        }
    }
}
