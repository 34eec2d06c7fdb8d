//! pajek writer: `*Vertices n`, `*Edges`, 1-based ids.

use coarsen_core::types::OutputFormat;
use coarsen_engine::MultiLayerGraph;

use super::{fmt_weight, GraphWriter};

pub struct PajekWriter;

impl GraphWriter for PajekWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pajek
    }

    fn render(&self, graph: &MultiLayerGraph) -> String {
        let mut out = format!("*Vertices {}\n*Edges\n", graph.vertex_count());
        for (u, v, w) in graph.edges() {
            out.push_str(&format!("{} {} {}\n", u + 1, v + 1, fmt_weight(w)));
        }
        out
    }
}
