//! Greedy edge-order matching under a vertex budget.

use std::cmp::Ordering;

use coarsen_core::constants::BUDGET_EPSILON;
use coarsen_core::types::MatchingStrategy;
use rand::seq::SliceRandom;
use rand::Rng;

use super::types::Matching;
use crate::projection::Projection;

type Edge = (usize, usize, f64);

/// Maximum number of matched vertices for `n` vertices at `reduction_factor`.
pub fn budget(n: usize, reduction_factor: f64) -> usize {
    let raw = (reduction_factor * n as f64 + BUDGET_EPSILON).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(n)
    }
}

/// Projection edges in the order the strategy visits them.
pub fn edge_order<R: Rng + ?Sized>(
    projection: &Projection,
    strategy: MatchingStrategy,
    rng: &mut R,
) -> Vec<Edge> {
    let mut edges: Vec<Edge> = projection.edges().collect();
    edges.sort_unstable_by(canonical);
    match strategy {
        MatchingStrategy::Hem => {
            edges.sort_by(|a, b| b.2.total_cmp(&a.2).then_with(|| canonical(a, b)));
        }
        MatchingStrategy::Lem => {
            edges.sort_by(|a, b| a.2.total_cmp(&b.2).then_with(|| canonical(a, b)));
        }
        MatchingStrategy::Rm => edges.shuffle(rng),
    }
    edges
}

/// Match a projection's vertices.
///
/// Edges are visited in strategy order; a pair is taken when both endpoints
/// are free and two more matched vertices still fit in the budget.
pub fn match_projection<R: Rng + ?Sized>(
    projection: &Projection,
    strategy: MatchingStrategy,
    reduction_factor: f64,
    rng: &mut R,
) -> Matching {
    let _span = coarsen_core::match_span!(projection.layer(), strategy).entered();
    let n = projection.vertex_count();
    let limit = budget(n, reduction_factor);
    let mut matching = Matching::identity(n);
    if limit < 2 || projection.edge_count() == 0 {
        tracing::debug!(layer = projection.layer(), n, limit, "nothing to match");
        return matching;
    }

    let mut matched = 0;
    for (u, v, _) in edge_order(projection, strategy, rng) {
        if matched + 2 > limit {
            break;
        }
        if matching.try_pair(u, v) {
            matched += 2;
        }
    }

    tracing::debug!(
        layer = projection.layer(),
        n,
        limit,
        pairs = matching.pair_count(),
        "matched layer"
    );
    matching
}

fn canonical(a: &Edge, b: &Edge) -> Ordering {
    (a.0, a.1).cmp(&(b.0, b.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MultiLayerGraph;
    use crate::projection::project;
    use coarsen_core::types::SimilarityMeasure;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Layer 0 projection under weighted_common_neighbors:
    /// (0,1) = 3, (1,2) = 1, (2,3) = 2.
    fn projection() -> Projection {
        let g = MultiLayerGraph::from_edges(
            vec![4, 3],
            vec![
                (0, 4, 3.0),
                (1, 4, 3.0),
                (1, 5, 1.0),
                (2, 5, 1.0),
                (2, 6, 2.0),
                (3, 6, 2.0),
            ],
        )
        .unwrap();
        project(&g, 0, SimilarityMeasure::WeightedCommonNeighbors).unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn budget_floors_and_clamps() {
        assert_eq!(budget(4, 1.0), 4);
        assert_eq!(budget(5, 0.5), 2);
        assert_eq!(budget(3, 0.3), 0);
        assert_eq!(budget(10, 0.3), 3);
        assert_eq!(budget(0, 1.0), 0);
    }

    #[test]
    fn hem_prefers_heavy_edges() {
        let m = match_projection(&projection(), MatchingStrategy::Hem, 1.0, &mut rng());
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn lem_prefers_light_edges() {
        let m = match_projection(&projection(), MatchingStrategy::Lem, 1.0, &mut rng());
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(m.group_count(), 3);
    }

    #[test]
    fn budget_stops_matching() {
        let m = match_projection(&projection(), MatchingStrategy::Hem, 0.5, &mut rng());
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1)]);
        let none = match_projection(&projection(), MatchingStrategy::Hem, 0.25, &mut rng());
        assert_eq!(none.pair_count(), 0);
    }

    #[test]
    fn random_matching_is_seeded() {
        let p = projection();
        let a = match_projection(&p, MatchingStrategy::Rm, 1.0, &mut rng());
        let b = match_projection(&p, MatchingStrategy::Rm, 1.0, &mut rng());
        assert_eq!(a, b);
        assert!(a.pair_count() >= 1);
    }

    #[test]
    fn ties_break_on_endpoints() {
        let g = MultiLayerGraph::from_edges(
            vec![3, 1],
            vec![(0, 3, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
        )
        .unwrap();
        let p = project(&g, 0, SimilarityMeasure::CommonNeighbors).unwrap();
        let order = edge_order(&p, MatchingStrategy::Hem, &mut rng());
        assert_eq!(
            order.iter().map(|&(u, v, _)| (u, v)).collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (1, 2)]
        );
        let m = match_projection(&p, MatchingStrategy::Hem, 1.0, &mut rng());
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1)]);
    }
}
