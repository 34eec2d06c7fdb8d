//! One-mode projection of a layer onto a weighted same-layer graph.
//!
//! Pairs are found by walking two hops (`u → shared neighbor → v`), so the
//! cost follows the number of shared neighbors, not the square of the layer
//! size. Rows are computed in parallel and assembled in vertex order.

use std::ops::Range;

use coarsen_core::errors::GraphError;
use coarsen_core::project_span;
use coarsen_core::types::collections::FxHashMap;
use coarsen_core::types::SimilarityMeasure;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rayon::prelude::*;

use crate::graph::MultiLayerGraph;
use crate::similarity::{formula, Formula, PairEvidence};

/// Same-layer similarity graph. Node `i` is the layer-local vertex `i`;
/// its node weight is the vertex id in the source graph.
#[derive(Debug, Clone)]
pub struct Projection {
    layer: usize,
    measure: SimilarityMeasure,
    graph: UnGraph<usize, f64>,
}

impl Projection {
    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn measure(&self) -> SimilarityMeasure {
        self.measure
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertex id in the source graph of layer-local vertex `local`.
    pub fn source_id(&self, local: usize) -> usize {
        self.graph[NodeIndex::new(local)]
    }

    /// Edges as `(u, v, weight)` with local ids, `u < v`, sorted by `(u, v)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph.edge_references().map(|e| {
            let (a, b) = (e.source().index(), e.target().index());
            (a.min(b), a.max(b), *e.weight())
        })
    }

    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f64> {
        self.graph
            .find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    pub fn graph(&self) -> &UnGraph<usize, f64> {
        &self.graph
    }
}

/// Project `layer` of `graph` with `measure`. Pairs without a shared
/// neighbor, or with a zero score, get no edge.
pub fn project(
    graph: &MultiLayerGraph,
    layer: usize,
    measure: SimilarityMeasure,
) -> Result<Projection, GraphError> {
    let _span = project_span!(layer, measure).entered();
    let range = graph.layer_range(layer)?;
    let score = formula(measure);

    let rows: Vec<Vec<(usize, f64)>> = range
        .clone()
        .into_par_iter()
        .map(|u| projection_row(graph, &range, u, score))
        .collect();

    let n = range.len();
    let edge_total: usize = rows.iter().map(Vec::len).sum();
    let mut projection: UnGraph<usize, f64> = UnGraph::with_capacity(n, edge_total);
    for id in range.clone() {
        projection.add_node(id);
    }
    for (local_u, row) in rows.into_iter().enumerate() {
        for (local_v, weight) in row {
            projection.add_edge(NodeIndex::new(local_u), NodeIndex::new(local_v), weight);
        }
    }

    tracing::debug!(
        layer,
        vertices = n,
        edges = projection.edge_count(),
        "projected layer"
    );

    Ok(Projection {
        layer,
        measure,
        graph: projection,
    })
}

/// Scored pairs `(u, v)` with `v > u`, as local ids sorted by `v`.
fn projection_row(
    graph: &MultiLayerGraph,
    range: &Range<usize>,
    u: usize,
    score: Formula,
) -> Vec<(usize, f64)> {
    let degree_u = graph.degree(u);
    let mut candidates: FxHashMap<usize, PairEvidence> = FxHashMap::default();
    for &(shared, weight_u) in graph.neighbors(u) {
        let shared_degree = graph.degree(shared);
        for &(v, weight_v) in graph.neighbors(shared) {
            if v <= u || !range.contains(&v) {
                continue;
            }
            candidates
                .entry(v)
                .or_insert_with(|| PairEvidence::new(degree_u, graph.degree(v)))
                .add_shared(weight_u, weight_v, shared_degree);
        }
    }

    let mut row: Vec<(usize, f64)> = candidates
        .into_iter()
        .map(|(v, evidence)| (v - range.start, score(&evidence)))
        .filter(|&(_, weight)| weight > 0.0 && weight.is_finite())
        .collect();
    row.sort_unstable_by_key(|&(v, _)| v);
    row
}
