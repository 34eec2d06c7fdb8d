//! Vertex matching on a layer projection (hem, lem, rm).

pub mod greedy;
pub mod types;

pub use greedy::{budget, edge_order, match_projection};
pub use types::{Group, Matching};
