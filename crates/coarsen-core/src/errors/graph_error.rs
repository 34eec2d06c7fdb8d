//! Graph construction and contraction errors.

use super::error_code::{self, CoarsenErrorCode};

/// Errors raised by graph construction, projection, and contraction.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("Layer {layer} out of range (graph has {layer_count} layers)")]
    LayerOutOfRange { layer: usize, layer_count: usize },

    #[error("Edge ({u}, {v}) has invalid weight {weight}: weights must be finite and positive")]
    InvalidWeight { u: usize, v: usize, weight: f64 },

    #[error("Self loop on vertex {0}")]
    SelfLoop(usize),

    #[error("Edge ({u}, {v}) connects two vertices of layer {layer}")]
    IntraLayerEdge { u: usize, v: usize, layer: usize },

    #[error("Layer sizes sum to {expected}, but {actual} vertices were given")]
    LayerSizeMismatch { expected: usize, actual: usize },

    #[error("Graph layer sizes {actual:?} do not fit the configured layer sizes {expected:?}")]
    LayerShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Matching for layer {layer} covers {actual} vertices, layer has {expected}")]
    MatchingSizeMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },
}

impl CoarsenErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MatchingSizeMismatch { .. } => error_code::MATCHING_ERROR,
            _ => error_code::GRAPH_ERROR,
        }
    }
}
