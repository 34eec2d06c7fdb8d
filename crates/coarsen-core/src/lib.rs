//! # coarsen-core
//!
//! Foundation crate for the multilevel coarsening engine.
//! Defines the shared types, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{CoarseningOptions, CoarsenConfig, RunOptions};
pub use errors::{CoarsenError, CoarsenResult};
pub use types::{MatchingStrategy, OutputFormat, SimilarityMeasure};
