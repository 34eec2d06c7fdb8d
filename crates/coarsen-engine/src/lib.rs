//! # coarsen-engine
//!
//! Multilevel coarsening of k-partite graphs. One round projects each
//! eligible layer onto a same-layer similarity graph, matches vertices
//! greedily on that projection, and contracts all matched pairs at once.
//!
//! ```text
//! MultiLayerGraph ─► project ─► match ─┐
//!        ▲          (per layer)        ├─► coarsen ─► MultiLayerGraph'
//!        └──────── HierarchyController ┘
//! ```

pub mod coarsening;
pub mod graph;
pub mod hierarchy;
pub mod matching;
pub mod projection;
pub mod similarity;

pub use coarsening::coarsen;
pub use graph::{GraphBuilder, MultiLayerGraph, Vertex};
pub use hierarchy::{Hierarchy, HierarchyController, LevelState, RoundOutcome, Snapshot};
pub use matching::{match_projection, Matching};
pub use projection::{project, Projection};
pub use similarity::{similarity, PairEvidence};
