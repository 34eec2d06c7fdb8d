//! Command-line arguments and their mapping onto config overrides.

use std::path::PathBuf;

use clap::Parser;
use coarsen_core::config::CliOverrides;

/// Multilevel coarsening of k-partite networks.
///
/// Builds a hierarchy of smaller graphs by projecting each layer onto a
/// same-layer similarity graph, matching vertices on it, and contracting
/// matched pairs.
#[derive(Debug, Parser)]
#[command(name = "coarsen", version, about, long_about = None)]
pub struct Cli {
    /// Input edge list (ncol, or pajek for .net/.pajek)
    #[arg(short = 'f', long = "filename")]
    pub filename: Option<String>,

    /// Number of vertices in each layer
    #[arg(short = 'v', long = "vertices", num_args = 1..)]
    pub vertices: Option<Vec<usize>>,

    /// Output directory (default: the input file's directory)
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<String>,

    /// Output file prefix (default: <input stem>_coarsened_)
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Reduction factor for each layer, in (0, 1]
    #[arg(short = 'r', long = "reduction_factor", num_args = 1..)]
    pub reduction_factor: Option<Vec<f64>>,

    /// Maximum number of contraction rounds for each layer
    #[arg(short = 'm', long = "max_levels", num_args = 1..)]
    pub max_levels: Option<Vec<u32>>,

    /// Matching method: hem, lem or rm
    #[arg(short = 'c', long = "matching", num_args = 1..)]
    pub matching: Option<Vec<String>>,

    /// Similarity measure for the one-mode projection
    #[arg(short = 's', long = "similarity", num_args = 1..)]
    pub similarity: Option<Vec<String>>,

    /// Layers to contract (default: all)
    #[arg(short = 'l', long = "layers_to_contract", num_args = 1..)]
    pub layers_to_contract: Option<Vec<usize>>,

    /// Output graph format: ncol, gml or pajek
    #[arg(short = 'e', long = "extension")]
    pub extension: Option<String>,

    /// Keep and write every level, not only the last
    #[arg(long = "save_hierarchy")]
    pub save_hierarchy: bool,

    /// Print the timing table
    #[arg(long = "show_timing")]
    pub show_timing: bool,

    /// Save timing as CSV
    #[arg(long = "save_timing_csv")]
    pub save_timing_csv: bool,

    /// Save timing as JSON
    #[arg(long = "save_timing_json")]
    pub save_timing_json: bool,

    /// Append a timestamp to the output prefix
    #[arg(long = "unique_key")]
    pub unique_key: bool,

    /// Seed for random matching
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (default: ./coarsen.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the merged configuration as TOML and exit
    #[arg(long = "dump-config")]
    pub dump_config: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

/// Switch flags only override when set, so config files can turn them on.
fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            filename: self.filename.clone(),
            vertices: self.vertices.clone(),
            directory: self.directory.clone(),
            prefix: self.output.clone(),
            reduction_factor: self.reduction_factor.clone(),
            max_levels: self.max_levels.clone(),
            // Multi-word names arrive as separate values.
            matching: self.matching.as_ref().map(|words| words.join("_")),
            similarity: self.similarity.as_ref().map(|words| words.join("_")),
            layers_to_contract: self.layers_to_contract.clone(),
            extension: self.extension.clone(),
            seed: self.seed,
            save_hierarchy: flag(self.save_hierarchy),
            unique_key: flag(self.unique_key),
            show_timing: flag(self.show_timing),
            save_timing_csv: flag(self.save_timing_csv),
            save_timing_json: flag(self.save_timing_json),
        }
    }
}
