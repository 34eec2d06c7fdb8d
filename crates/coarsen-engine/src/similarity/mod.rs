//! Similarity between two vertices of the same layer, from their shared
//! cross-layer neighborhood.

pub mod evidence;
pub mod measures;

use coarsen_core::types::SimilarityMeasure;

use crate::graph::MultiLayerGraph;

pub use evidence::PairEvidence;

/// A similarity formula bound to one [`SimilarityMeasure`] variant.
pub type Formula = fn(&PairEvidence) -> f64;

/// Resolve a measure into its formula. Called once per projection.
pub fn formula(measure: SimilarityMeasure) -> Formula {
    match measure {
        SimilarityMeasure::Weight => measures::weight,
        SimilarityMeasure::CommonNeighbors => measures::common_neighbors,
        SimilarityMeasure::WeightedCommonNeighbors => measures::weighted_common_neighbors,
        SimilarityMeasure::Salton => measures::salton,
        SimilarityMeasure::PreferentialAttachment => measures::preferential_attachment,
        SimilarityMeasure::Jaccard => measures::jaccard,
        SimilarityMeasure::AdamicAdar => measures::adamic_adar,
        SimilarityMeasure::ResourceAllocation => measures::resource_allocation,
        SimilarityMeasure::Sorensen => measures::sorensen,
        SimilarityMeasure::HubPromoted => measures::hub_promoted,
        SimilarityMeasure::HubDepressed => measures::hub_depressed,
        SimilarityMeasure::LeichtHolmeNewman => measures::leicht_holme_newman,
    }
}

/// Shared-neighborhood evidence of `u` and `v`, by merging their sorted
/// adjacency lists.
pub fn pair_evidence(graph: &MultiLayerGraph, u: usize, v: usize) -> PairEvidence {
    let (nu, nv) = (graph.neighbors(u), graph.neighbors(v));
    let mut evidence = PairEvidence::new(nu.len(), nv.len());
    let (mut i, mut j) = (0, 0);
    while i < nu.len() && j < nv.len() {
        let ((a, wa), (b, wb)) = (nu[i], nv[j]);
        match a.cmp(&b) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                evidence.add_shared(wa, wb, graph.degree(a));
                i += 1;
                j += 1;
            }
        }
    }
    evidence
}

/// Similarity of `u` and `v` within `layer`.
///
/// Returns 0 when either vertex is outside `layer`, when `u == v`, or when
/// the two share no neighbor.
pub fn similarity(
    graph: &MultiLayerGraph,
    layer: usize,
    u: usize,
    v: usize,
    measure: SimilarityMeasure,
) -> f64 {
    let Ok(range) = graph.layer_range(layer) else {
        return 0.0;
    };
    if u == v || !range.contains(&u) || !range.contains(&v) {
        return 0.0;
    }
    let evidence = pair_evidence(graph, u, v);
    if !evidence.has_shared() {
        return 0.0;
    }
    formula(measure)(&evidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// layer 0: {0, 1, 2}, layer 1: {3, 4, 5}
    /// 0 - 3, 0 - 4, 1 - 3, 1 - 4, 1 - 5, 2 - 5
    fn graph() -> MultiLayerGraph {
        MultiLayerGraph::from_edges(
            vec![3, 3],
            vec![
                (0, 3, 1.0),
                (0, 4, 2.0),
                (1, 3, 3.0),
                (1, 4, 1.0),
                (1, 5, 1.0),
                (2, 5, 4.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn pair_evidence_collects_shared_neighbors() {
        let g = graph();
        let e = pair_evidence(&g, 0, 1);
        assert_eq!(e.degree_u, 2);
        assert_eq!(e.degree_v, 3);
        assert_eq!(e.common, 2);
        assert!((e.weight_sum - 7.0).abs() < 1e-12);
        assert!((e.min_weight_sum - 2.0).abs() < 1e-12);
    }

    #[test]
    fn similarity_respects_layer_and_sharing() {
        let g = graph();
        assert_eq!(similarity(&g, 0, 0, 1, SimilarityMeasure::CommonNeighbors), 2.0);
        assert_eq!(similarity(&g, 0, 0, 2, SimilarityMeasure::CommonNeighbors), 0.0);
        assert_eq!(
            similarity(&g, 0, 0, 2, SimilarityMeasure::PreferentialAttachment),
            0.0
        );
        // 3 is not in layer 0.
        assert_eq!(similarity(&g, 0, 0, 3, SimilarityMeasure::CommonNeighbors), 0.0);
        assert_eq!(similarity(&g, 0, 1, 1, SimilarityMeasure::CommonNeighbors), 0.0);
        assert_eq!(similarity(&g, 7, 0, 1, SimilarityMeasure::CommonNeighbors), 0.0);
        // Layer 1: 3 and 4 share {0, 1}.
        assert_eq!(similarity(&g, 1, 3, 4, SimilarityMeasure::Jaccard), 1.0);
    }

    #[test]
    fn every_measure_is_nonnegative() {
        let g = graph();
        for measure in SimilarityMeasure::ALL {
            for (u, v) in [(0, 1), (1, 2), (0, 2)] {
                let s = similarity(&g, 0, u, v, measure);
                assert!(s >= 0.0 && s.is_finite(), "{measure}: {s}");
            }
        }
    }
}
