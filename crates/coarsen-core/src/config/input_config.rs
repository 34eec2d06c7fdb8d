//! Input configuration.

use serde::{Deserialize, Serialize};

/// Where the level-0 graph comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Edge-list file to load.
    pub filename: Option<String>,
    /// Number of vertices in each layer, in vertex-id order.
    #[serde(default)]
    pub vertices: Vec<usize>,
}
