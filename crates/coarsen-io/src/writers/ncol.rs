//! ncol writer: `u v weight` per edge.

use coarsen_core::types::OutputFormat;
use coarsen_engine::MultiLayerGraph;

use super::{fmt_weight, GraphWriter};

pub struct NcolWriter;

impl GraphWriter for NcolWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Ncol
    }

    fn render(&self, graph: &MultiLayerGraph) -> String {
        let mut out = String::new();
        for (u, v, w) in graph.edges() {
            out.push_str(&format!("{u} {v} {}\n", fmt_weight(w)));
        }
        out
    }
}
