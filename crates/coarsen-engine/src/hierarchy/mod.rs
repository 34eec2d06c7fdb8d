//! Round-by-round coarsening driven by per-layer level counters.

pub mod controller;
pub mod state;

pub use controller::{Hierarchy, HierarchyController, RoundOutcome, Snapshot};
pub use state::LevelState;
