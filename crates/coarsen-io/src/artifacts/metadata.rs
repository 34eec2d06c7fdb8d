//! `.conf` level metadata.

use std::collections::BTreeMap;

use coarsen_engine::MultiLayerGraph;
use serde::{Deserialize, Serialize};

/// Summary of one retained level. Per-layer vertex counts are flattened
/// into `v0`, `v1`, … keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMetadata {
    pub edges: usize,
    pub vertices: usize,
    pub levels: Vec<u32>,
    #[serde(flatten)]
    pub layer_vertices: BTreeMap<String, usize>,
}

impl LevelMetadata {
    pub fn of(graph: &MultiLayerGraph) -> Self {
        let layer_vertices = graph
            .layer_sizes()
            .iter()
            .enumerate()
            .map(|(layer, &count)| (format!("v{layer}"), count))
            .collect();
        Self {
            edges: graph.edge_count(),
            vertices: graph.vertex_count(),
            levels: graph.levels().to_vec(),
            layer_vertices,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_layer_counts() {
        let g = MultiLayerGraph::from_edges(vec![2, 1], vec![(0, 2, 1.0), (1, 2, 1.0)]).unwrap();
        let meta = LevelMetadata::of(&g);
        let value: serde_json::Value = serde_json::from_str(&meta.to_json().unwrap()).unwrap();
        assert_eq!(value["edges"], 2);
        assert_eq!(value["vertices"], 3);
        assert_eq!(value["v0"], 2);
        assert_eq!(value["v1"], 1);
        assert_eq!(value["levels"], serde_json::json!([0, 0]));
        let back: LevelMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(back, meta);
    }
}
