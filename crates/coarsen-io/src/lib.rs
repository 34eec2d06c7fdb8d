//! # coarsen-io
//!
//! Everything around the engine that touches the filesystem: edge-list
//! loading, graph serializers (ncol, gml, pajek), per-level artifacts,
//! run timing, and [`pipeline::run`], which ties them together.

pub mod artifacts;
pub mod loader;
pub mod paths;
pub mod pipeline;
pub mod timing;
pub mod writers;

pub use loader::{load, InputFormat};
pub use paths::OutputPaths;
pub use pipeline::{run, RunSummary};
pub use timing::Timing;
pub use writers::{create_writer, GraphWriter};
