//! Output configuration.

use serde::{Deserialize, Serialize};

/// Where and how per-level artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory. Default: the input file's directory.
    pub directory: Option<String>,
    /// Artifact file prefix. Default: `<input stem>_coarsened_`.
    pub prefix: Option<String>,
    /// Graph serialization format: ncol, gml, or pajek. Default: ncol.
    pub extension: Option<String>,
    /// Append a timestamp to the prefix. Default: false.
    pub unique_key: Option<bool>,
    /// Print the timing table after the run. Default: false.
    pub show_timing: Option<bool>,
    /// Save timing as CSV next to the artifacts. Default: false.
    pub save_timing_csv: Option<bool>,
    /// Save timing as JSON next to the artifacts. Default: false.
    pub save_timing_json: Option<bool>,
}
