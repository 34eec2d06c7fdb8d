//! Error handling for the coarsening engine.
//! One error enum per subsystem, `thiserror` only.

pub mod coarsen_error;
pub mod config_error;
pub mod error_code;
pub mod format_error;
pub mod graph_error;

pub use coarsen_error::{CoarsenError, CoarsenResult};
pub use config_error::ConfigError;
pub use error_code::CoarsenErrorCode;
pub use format_error::FormatError;
pub use graph_error::GraphError;
