//! gml writer. Graph attributes carry the layer count, per-layer vertex
//! counts and per-layer levels; nodes carry their layer as `type`.

use coarsen_core::constants::VERSION;
use coarsen_core::types::OutputFormat;
use coarsen_engine::MultiLayerGraph;

use super::{fmt_weight, GraphWriter};

pub struct GmlWriter {
    pub indent: &'static str,
}

impl Default for GmlWriter {
    fn default() -> Self {
        Self { indent: "  " }
    }
}

fn joined<T: ToString>(values: &[T]) -> String {
    values.iter().map(T::to_string).collect::<Vec<_>>().join(" ")
}

impl GraphWriter for GmlWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Gml
    }

    fn render(&self, graph: &MultiLayerGraph) -> String {
        let i1 = self.indent;
        let i2 = self.indent.repeat(2);
        let mut out = String::new();
        out.push_str(&format!("Creator \"coarsen {VERSION}\"\n"));
        out.push_str("graph\n[\n");
        out.push_str(&format!("{i1}directed 0\n"));
        out.push_str(&format!("{i1}layers {}\n", graph.layer_count()));
        out.push_str(&format!("{i1}vertices \"{}\"\n", joined(graph.layer_sizes())));
        out.push_str(&format!("{i1}level \"{}\"\n", joined(graph.levels())));
        for (id, vertex) in graph.vertices().enumerate() {
            out.push_str(&format!("{i1}node\n{i1}[\n"));
            out.push_str(&format!("{i2}id {id}\n"));
            out.push_str(&format!("{i2}type {}\n", vertex.layer));
            out.push_str(&format!("{i2}weight {}\n", fmt_weight(vertex.weight)));
            out.push_str(&format!("{i1}]\n"));
        }
        for (u, v, w) in graph.edges() {
            out.push_str(&format!("{i1}edge\n{i1}[\n"));
            out.push_str(&format!("{i2}source {u}\n"));
            out.push_str(&format!("{i2}target {v}\n"));
            out.push_str(&format!("{i2}weight {}\n", fmt_weight(w)));
            out.push_str(&format!("{i1}]\n"));
        }
        out.push_str("]\n");
        out
    }
}
