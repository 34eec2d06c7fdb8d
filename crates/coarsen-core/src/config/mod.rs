//! Configuration system for the coarsening engine.
//! TOML-based, layered resolution: CLI > env > config file > defaults,
//! then resolved once into validated [`RunOptions`].

pub mod coarsen_config;
pub mod coarsening_config;
pub mod input_config;
pub mod options;
pub mod output_config;

pub use coarsen_config::{CliOverrides, CoarsenConfig};
pub use coarsening_config::CoarseningConfig;
pub use input_config::InputConfig;
pub use options::{CoarseningOptions, InputOptions, OutputOptions, RunOptions};
pub use output_config::OutputConfig;
