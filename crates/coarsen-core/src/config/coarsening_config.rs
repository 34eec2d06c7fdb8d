//! Coarsening configuration (raw, as read from TOML/env/CLI).

use serde::{Deserialize, Serialize};

/// Raw coarsening parameters. Names are kept as strings here and only turned
/// into closed enums by [`super::CoarsenConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoarseningConfig {
    /// Per-layer reduction factor in (0, 1]. Default: 0.5 for every layer.
    #[serde(default)]
    pub reduction_factor: Vec<f64>,
    /// Per-layer number of contraction rounds. Default: 3 for every layer.
    #[serde(default)]
    pub max_levels: Vec<u32>,
    /// Matching method: hem, lem, or rm. Default: hem.
    pub matching: Option<String>,
    /// Similarity measure name. Default: common_neighbors.
    pub similarity: Option<String>,
    /// Layers that are ever contracted. Default: all layers.
    #[serde(default)]
    pub layers_to_contract: Vec<usize>,
    /// Seed for random matching. Default: drawn at run start and logged.
    pub seed: Option<u64>,
    /// Keep every level of the hierarchy, not only the last. Default: false.
    pub save_hierarchy: Option<bool>,
}
