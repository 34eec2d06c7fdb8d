//! Layered weighted graph with per-vertex provenance.

pub mod builder;
pub mod multilayer;

pub use builder::GraphBuilder;
pub use multilayer::{MultiLayerGraph, Vertex};
