//! Validating builder for [`MultiLayerGraph`].

use coarsen_core::errors::GraphError;
use coarsen_core::types::collections::FxHashMap;
use petgraph::graph::{NodeIndex, UnGraph};

use super::multilayer::{offsets, MultiLayerGraph, Vertex};

/// Accumulates vertices and edges, merging parallel edges by summing weights.
#[derive(Debug)]
pub struct GraphBuilder {
    layer_sizes: Vec<usize>,
    levels: Vec<u32>,
    vertices: Vec<Vertex>,
    edges: FxHashMap<(usize, usize), f64>,
}

impl GraphBuilder {
    /// Level-0 builder: one singleton vertex per id, layers assigned by
    /// `layer_sizes`, all levels zero.
    pub fn new(layer_sizes: Vec<usize>) -> Self {
        let offsets = offsets(&layer_sizes);
        let mut vertices = Vec::with_capacity(offsets[layer_sizes.len()]);
        for layer in 0..layer_sizes.len() {
            for id in offsets[layer]..offsets[layer + 1] {
                vertices.push(Vertex::singleton(id, layer));
            }
        }
        let levels = vec![0; layer_sizes.len()];
        Self {
            layer_sizes,
            levels,
            vertices,
            edges: FxHashMap::default(),
        }
    }

    /// Builder over explicit vertices, e.g. the super-vertices of a contraction.
    /// Vertices must be ordered by layer and match `layer_sizes`.
    pub fn with_vertices(
        layer_sizes: Vec<usize>,
        vertices: Vec<Vertex>,
        levels: Vec<u32>,
    ) -> Result<Self, GraphError> {
        let offsets = offsets(&layer_sizes);
        let expected = offsets[layer_sizes.len()];
        if vertices.len() != expected {
            return Err(GraphError::LayerSizeMismatch {
                expected,
                actual: vertices.len(),
            });
        }
        for layer in 0..layer_sizes.len() {
            for id in offsets[layer]..offsets[layer + 1] {
                if vertices[id].layer != layer {
                    return Err(GraphError::LayerOutOfRange {
                        layer: vertices[id].layer,
                        layer_count: layer_sizes.len(),
                    });
                }
            }
        }
        Ok(Self {
            layer_sizes,
            levels,
            vertices,
            edges: FxHashMap::default(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Add an undirected edge; repeated pairs accumulate weight.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), GraphError> {
        let vertex_count = self.vertices.len();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if !(weight.is_finite() && weight > 0.0) {
            return Err(GraphError::InvalidWeight { u, v, weight });
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        let layer = self.vertices[u].layer;
        if layer == self.vertices[v].layer {
            return Err(GraphError::IntraLayerEdge { u, v, layer });
        }
        *self.edges.entry((u.min(v), u.max(v))).or_insert(0.0) += weight;
        Ok(())
    }

    /// Finish the graph. Edges are inserted sorted by `(u, v)`.
    pub fn build(self) -> MultiLayerGraph {
        let mut edges: Vec<((usize, usize), f64)> = self.edges.into_iter().collect();
        edges.sort_unstable_by_key(|&(key, _)| key);

        let mut graph: UnGraph<Vertex, f64> =
            UnGraph::with_capacity(self.vertices.len(), edges.len());
        for vertex in self.vertices {
            graph.add_node(vertex);
        }
        for ((u, v), weight) in edges {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), weight);
        }
        MultiLayerGraph::from_parts(graph, self.layer_sizes, self.levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_duplicate_edges() {
        let mut b = GraphBuilder::new(vec![1, 1]);
        b.add_edge(0, 1, 1.5).unwrap();
        b.add_edge(1, 0, 2.0).unwrap();
        let g = b.build();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(0, 1), Some(3.5));
    }

    #[test]
    fn rejects_invalid_edges() {
        let mut b = GraphBuilder::new(vec![2, 1]);
        assert!(matches!(
            b.add_edge(0, 5, 1.0),
            Err(GraphError::VertexOutOfRange { vertex: 5, .. })
        ));
        assert!(matches!(
            b.add_edge(0, 2, 0.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            b.add_edge(0, 2, f64::INFINITY),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(b.add_edge(2, 2, 1.0), Err(GraphError::SelfLoop(2))));
        assert!(matches!(
            b.add_edge(0, 1, 1.0),
            Err(GraphError::IntraLayerEdge { layer: 0, .. })
        ));
    }

    #[test]
    fn with_vertices_checks_layer_sizes() {
        let vertices = vec![Vertex::singleton(0, 0), Vertex::singleton(1, 1)];
        assert!(GraphBuilder::with_vertices(vec![1, 1], vertices.clone(), vec![0, 0]).is_ok());
        assert!(matches!(
            GraphBuilder::with_vertices(vec![2, 1], vertices.clone(), vec![0, 0]),
            Err(GraphError::LayerSizeMismatch { expected: 3, actual: 2 })
        ));
        assert!(GraphBuilder::with_vertices(vec![2, 0], vertices, vec![0, 0]).is_err());
    }
}
