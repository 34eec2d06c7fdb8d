//! Contraction of matched groups into super-vertices.

use std::collections::BTreeMap;

use coarsen_core::contract_span;
use coarsen_core::errors::GraphError;

use crate::graph::{GraphBuilder, MultiLayerGraph, Vertex};
use crate::matching::Matching;

/// Contract `graph` with one matching per contracted layer.
///
/// Layers missing from `matchings` keep their vertices. Super-vertex ids are
/// assigned layer by layer in representative order, and parallel edges
/// between super-vertices are merged by summing. Level counters advance for
/// the layers in `matchings` only.
pub fn coarsen(
    graph: &MultiLayerGraph,
    matchings: &BTreeMap<usize, Matching>,
) -> Result<MultiLayerGraph, GraphError> {
    let layers: Vec<usize> = matchings.keys().copied().collect();
    let _span = contract_span!(layers).entered();
    if matchings.is_empty() {
        return Ok(graph.clone());
    }

    for (&layer, matching) in matchings {
        let range = graph.layer_range(layer)?;
        if matching.len() != range.len() {
            return Err(GraphError::MatchingSizeMismatch {
                layer,
                expected: range.len(),
                actual: matching.len(),
            });
        }
    }

    // old id -> new id
    let mut mapping = vec![0usize; graph.vertex_count()];
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut layer_sizes = Vec::with_capacity(graph.layer_count());
    for layer in 0..graph.layer_count() {
        let range = graph.layer_range(layer)?;
        let start = vertices.len();
        match matchings.get(&layer) {
            Some(matching) => {
                for group in matching.groups() {
                    let new_id = vertices.len();
                    let mut weight = 0.0;
                    let mut original = Vec::new();
                    for &local in &group {
                        let old = range.start + local;
                        let member = graph.vertex(old);
                        weight += member.weight;
                        original.extend_from_slice(&member.original);
                        mapping[old] = new_id;
                    }
                    original.sort_unstable();
                    vertices.push(Vertex {
                        layer,
                        weight,
                        original,
                    });
                }
            }
            None => {
                for old in range {
                    mapping[old] = vertices.len();
                    vertices.push(graph.vertex(old).clone());
                }
            }
        }
        layer_sizes.push(vertices.len() - start);
    }

    let mut levels = graph.levels().to_vec();
    for &layer in matchings.keys() {
        levels[layer] += 1;
    }

    let mut builder = GraphBuilder::with_vertices(layer_sizes, vertices, levels)?;
    for (u, v, weight) in graph.edges() {
        builder.add_edge(mapping[u], mapping[v], weight)?;
    }
    let coarse = builder.build();

    tracing::debug!(
        vertices_before = graph.vertex_count(),
        vertices_after = coarse.vertex_count(),
        edges_before = graph.edge_count(),
        edges_after = coarse.edge_count(),
        "contracted graph"
    );
    Ok(coarse)
}
