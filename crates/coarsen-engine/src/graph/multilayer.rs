//! MultiLayerGraph: petgraph `UnGraph` plus layer bookkeeping.
//!
//! Layers occupy contiguous vertex-id ranges in layer order. Instances are
//! immutable once built; the sorted adjacency lists are derived lazily per
//! instance and never shared between graphs.

use std::ops::Range;
use std::sync::OnceLock;

use coarsen_core::errors::GraphError;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::builder::GraphBuilder;

/// A (super-)vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub layer: usize,
    /// Sum of the weights of the level-0 vertices it represents.
    pub weight: f64,
    /// Sorted level-0 vertex ids represented by this vertex.
    pub original: Vec<usize>,
}

impl Vertex {
    /// A level-0 vertex: weight 1, representing only itself.
    pub fn singleton(id: usize, layer: usize) -> Self {
        Self {
            layer,
            weight: 1.0,
            original: vec![id],
        }
    }
}

type Adjacency = Vec<Vec<(usize, f64)>>;

/// Layered weighted graph. Every edge connects two different layers.
#[derive(Debug, Clone)]
pub struct MultiLayerGraph {
    pub(crate) graph: UnGraph<Vertex, f64>,
    pub(crate) layer_sizes: Vec<usize>,
    /// `layer_offsets[k]..layer_offsets[k + 1]` is the id range of layer `k`.
    pub(crate) layer_offsets: Vec<usize>,
    pub(crate) levels: Vec<u32>,
    adjacency: OnceLock<Adjacency>,
}

impl MultiLayerGraph {
    /// Build a level-0 graph: singleton vertices, all levels zero.
    /// Duplicate edges are merged by summing their weights.
    pub fn from_edges<I>(layer_sizes: Vec<usize>, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut builder = GraphBuilder::new(layer_sizes);
        for (u, v, weight) in edges {
            builder.add_edge(u, v, weight)?;
        }
        Ok(builder.build())
    }

    pub(crate) fn from_parts(
        graph: UnGraph<Vertex, f64>,
        layer_sizes: Vec<usize>,
        levels: Vec<u32>,
    ) -> Self {
        let layer_offsets = offsets(&layer_sizes);
        Self {
            graph,
            layer_sizes,
            layer_offsets,
            levels,
            adjacency: OnceLock::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Per-layer contraction round counters.
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Vertex-id range of `layer`.
    pub fn layer_range(&self, layer: usize) -> Result<Range<usize>, GraphError> {
        if layer >= self.layer_count() {
            return Err(GraphError::LayerOutOfRange {
                layer,
                layer_count: self.layer_count(),
            });
        }
        Ok(self.layer_offsets[layer]..self.layer_offsets[layer + 1])
    }

    /// # Panics
    /// Panics if `id` is out of range.
    pub fn vertex(&self, id: usize) -> &Vertex {
        &self.graph[NodeIndex::new(id)]
    }

    pub fn get_vertex(&self, id: usize) -> Option<&Vertex> {
        self.graph.node_weight(NodeIndex::new(id))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All edges as `(u, v, weight)` with `u < v`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph.edge_references().map(|e| {
            let (a, b) = (e.source().index(), e.target().index());
            (a.min(b), a.max(b), *e.weight())
        })
    }

    /// Neighbors of `id` with edge weights, sorted by neighbor id.
    pub fn neighbors(&self, id: usize) -> &[(usize, f64)] {
        &self.adjacency()[id]
    }

    pub fn degree(&self, id: usize) -> usize {
        self.neighbors(id).len()
    }

    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f64> {
        if u >= self.vertex_count() || v >= self.vertex_count() {
            return None;
        }
        let row = self.neighbors(u);
        row.binary_search_by_key(&v, |&(n, _)| n)
            .ok()
            .map(|pos| row[pos].1)
    }

    pub fn total_edge_weight(&self) -> f64 {
        self.graph.edge_weights().sum()
    }

    /// Total weight of the edges between layers `a` and `b`.
    pub fn cross_layer_weight(&self, a: usize, b: usize) -> f64 {
        self.edges()
            .filter(|&(u, v, _)| {
                let (lu, lv) = (self.vertex(u).layer, self.vertex(v).layer);
                (lu == a && lv == b) || (lu == b && lv == a)
            })
            .map(|(_, _, w)| w)
            .sum()
    }

    fn adjacency(&self) -> &Adjacency {
        self.adjacency.get_or_init(|| {
            let mut adjacency: Adjacency = vec![Vec::new(); self.vertex_count()];
            for (u, v, w) in self.edges() {
                adjacency[u].push((v, w));
                adjacency[v].push((u, w));
            }
            for row in &mut adjacency {
                row.sort_unstable_by_key(|&(n, _)| n);
            }
            adjacency
        })
    }
}

impl PartialEq for MultiLayerGraph {
    fn eq(&self, other: &Self) -> bool {
        self.layer_sizes == other.layer_sizes
            && self.levels == other.levels
            && self.vertices().eq(other.vertices())
            && self.edges().eq(other.edges())
    }
}

pub(crate) fn offsets(layer_sizes: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(layer_sizes.len() + 1);
    let mut acc = 0;
    offsets.push(acc);
    for &size in layer_sizes {
        acc += size;
        offsets.push(acc);
    }
    offsets
}
