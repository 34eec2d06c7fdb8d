//! HierarchyController: drives contraction rounds until no layer is eligible.

use std::collections::BTreeMap;

use coarsen_core::config::CoarseningOptions;
use coarsen_core::errors::{CoarsenError, ConfigError, GraphError};
use coarsen_core::round_span;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::state::LevelState;
use crate::coarsening::coarsen;
use crate::graph::MultiLayerGraph;
use crate::matching::{match_projection, Matching};
use crate::projection::project;

/// A retained graph with the level vector it was produced at.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub levels: Vec<u32>,
    pub graph: MultiLayerGraph,
}

impl Snapshot {
    fn of(graph: MultiLayerGraph) -> Self {
        Self {
            levels: graph.levels().to_vec(),
            graph,
        }
    }
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    snapshots: Vec<Snapshot>,
    rounds: usize,
    seed: u64,
    final_state: LevelState,
}

impl Hierarchy {
    /// Retained snapshots, coarsest last.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }

    pub fn final_graph(&self) -> &MultiLayerGraph {
        // Non-empty: `run` always retains at least the final graph.
        &self.snapshots[self.snapshots.len() - 1].graph
    }

    /// Rounds that contracted at least one layer.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn final_state(&self) -> &LevelState {
        &self.final_state
    }
}

/// What one round did.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// The contracted graph, or `None` when every eligible layer stalled.
    pub graph: Option<MultiLayerGraph>,
    pub state: LevelState,
    pub contracted: Vec<usize>,
    pub stalled: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct HierarchyController {
    options: CoarseningOptions,
    seed: u64,
}

impl HierarchyController {
    /// Validate `options` and fix the run seed. Without an explicit seed a
    /// random one is drawn and logged so the run can be reproduced.
    pub fn new(options: CoarseningOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let seed = match options.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                tracing::info!(seed, "no seed configured, drew one");
                seed
            }
        };
        Ok(Self { options, seed })
    }

    pub fn options(&self) -> &CoarseningOptions {
        &self.options
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Starting state for `graph`: levels resume from those stored on it.
    pub fn initial_state(&self, graph: &MultiLayerGraph) -> LevelState {
        LevelState::with_levels(
            self.options.max_levels.clone(),
            &self.options.layers_to_contract,
            graph.levels(),
        )
    }

    /// A layer still at level 0 must have its configured size; a layer that
    /// was already contracted may only be smaller.
    fn check_shape(&self, graph: &MultiLayerGraph) -> Result<(), GraphError> {
        let expected = &self.options.layer_sizes;
        let actual = graph.layer_sizes();
        let fits = actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected)
                .zip(graph.levels())
                .all(|((&got, &want), &level)| {
                    if level == 0 {
                        got == want
                    } else {
                        got <= want
                    }
                });
        if fits {
            Ok(())
        } else {
            Err(GraphError::LayerShapeMismatch {
                expected: expected.clone(),
                actual: actual.to_vec(),
            })
        }
    }

    /// One round over every eligible layer of `state`.
    ///
    /// Per-layer seeds are drawn from `rng` in layer order before the layers
    /// run in parallel, so results do not depend on scheduling.
    pub fn step(
        &self,
        graph: &MultiLayerGraph,
        state: &LevelState,
        rng: &mut ChaCha8Rng,
    ) -> Result<RoundOutcome, GraphError> {
        let seeded: Vec<(usize, u64)> = state
            .eligible_layers()
            .into_iter()
            .map(|layer| (layer, rng.gen()))
            .collect();

        let matchings: Vec<(usize, Matching)> = seeded
            .into_par_iter()
            .map(|(layer, seed)| -> Result<(usize, Matching), GraphError> {
                let projection = project(graph, layer, self.options.similarity)?;
                let mut layer_rng = ChaCha8Rng::seed_from_u64(seed);
                let matching = match_projection(
                    &projection,
                    self.options.matching,
                    self.options.reduction_factor[layer],
                    &mut layer_rng,
                );
                Ok((layer, matching))
            })
            .collect::<Result<_, _>>()?;

        let mut contracted = Vec::new();
        let mut stalled = Vec::new();
        let mut by_layer = BTreeMap::new();
        for (layer, matching) in matchings {
            if matching.pair_count() == 0 {
                tracing::info!(layer, "layer stalled: no pair to match");
                stalled.push(layer);
            } else {
                contracted.push(layer);
                by_layer.insert(layer, matching);
            }
        }

        let next = if by_layer.is_empty() {
            None
        } else {
            Some(coarsen(graph, &by_layer)?)
        };
        Ok(RoundOutcome {
            graph: next,
            state: state.advance(&contracted, &stalled),
            contracted,
            stalled,
        })
    }

    /// Coarsen `graph` until no layer is eligible.
    pub fn run(&self, graph: MultiLayerGraph) -> Result<Hierarchy, CoarsenError> {
        self.check_shape(&graph)?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut state = self.initial_state(&graph);
        let mut current = graph;
        let mut snapshots = Vec::new();
        let mut rounds = 0;

        while !state.is_terminal() {
            let _span = round_span!(rounds + 1).entered();
            let outcome = self.step(&current, &state, &mut rng)?;
            if let Some(next) = outcome.graph {
                rounds += 1;
                tracing::info!(
                    levels = ?next.levels(),
                    vertices = next.vertex_count(),
                    edges = next.edge_count(),
                    contracted = ?outcome.contracted,
                    "round complete"
                );
                if self.options.save_hierarchy {
                    snapshots.push(Snapshot::of(next.clone()));
                }
                current = next;
            }
            state = outcome.state;
        }

        if snapshots.is_empty() || !self.options.save_hierarchy {
            snapshots = vec![Snapshot::of(current)];
        }
        tracing::info!(rounds, seed = self.seed, "coarsening finished");
        Ok(Hierarchy {
            snapshots,
            rounds,
            seed: self.seed,
            final_state: state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coarsen_core::types::MatchingStrategy;

    /// Two disjoint stars on layer 1: {0, 1} share 4, {2, 3} share 5.
    fn graph() -> MultiLayerGraph {
        MultiLayerGraph::from_edges(
            vec![4, 2],
            vec![(0, 4, 1.0), (1, 4, 1.0), (2, 5, 1.0), (3, 5, 1.0)],
        )
        .unwrap()
    }

    fn options() -> CoarseningOptions {
        CoarseningOptions::new(vec![4, 2])
            .with_reduction_factor(vec![1.0, 1.0])
            .with_max_levels(vec![3, 3])
            .with_seed(11)
    }

    #[test]
    fn rejects_invalid_options() {
        let bad = options().with_reduction_factor(vec![1.5, 1.0]);
        assert!(HierarchyController::new(bad).is_err());
    }

    #[test]
    fn step_stalls_layers_without_pairs() {
        let c = HierarchyController::new(options()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(c.seed());
        let outcome = c.step(&graph(), &c.initial_state(&graph()), &mut rng).unwrap();
        assert_eq!(outcome.contracted, vec![0]);
        // 4 and 5 share no neighbor.
        assert_eq!(outcome.stalled, vec![1]);
        assert_eq!(outcome.state.levels(), &[1, 0]);
        let g = outcome.graph.unwrap();
        assert_eq!(g.layer_sizes(), &[2, 2]);
    }

    #[test]
    fn run_stops_when_every_layer_stalls() {
        let c = HierarchyController::new(options()).unwrap();
        let h = c.run(graph()).unwrap();
        assert_eq!(h.rounds(), 1);
        assert_eq!(h.snapshots().len(), 1);
        assert_eq!(h.final_graph().levels(), &[1, 0]);
        assert!(h.final_state().is_terminal());
        assert_eq!(h.seed(), 11);
    }

    #[test]
    fn nothing_to_contract_keeps_input() {
        let opts = options().with_layers_to_contract(vec![]);
        let h = HierarchyController::new(opts).unwrap().run(graph()).unwrap();
        assert_eq!(h.rounds(), 0);
        assert_eq!(h.final_graph(), &graph());
    }

    #[test]
    fn run_rejects_mismatched_graph() {
        let opts = CoarseningOptions::new(vec![3, 3]).with_matching(MatchingStrategy::Lem);
        let c = HierarchyController::new(opts).unwrap();
        assert!(matches!(
            c.run(graph()),
            Err(CoarsenError::Graph(GraphError::LayerShapeMismatch { .. }))
        ));
    }

    #[test]
    fn mismatch_reports_both_layouts() {
        // Same total as the fixture, different split.
        let mut opts = options();
        opts.layer_sizes = vec![3, 3];
        let c = HierarchyController::new(opts).unwrap();
        let err = c.run(graph()).unwrap_err();
        assert!(matches!(
            &err,
            CoarsenError::Graph(GraphError::LayerShapeMismatch { expected, actual })
                if expected == &vec![3, 3] && actual == &vec![4, 2]
        ));
        assert!(err.to_string().contains("[4, 2]"));
    }

    #[test]
    fn initial_state_resumes_from_graph_levels() {
        let c = HierarchyController::new(options()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(c.seed());
        let once = c.step(&graph(), &c.initial_state(&graph()), &mut rng).unwrap();
        let coarse = once.graph.unwrap();
        assert_eq!(c.initial_state(&coarse).levels(), &[1, 0]);
    }
}
