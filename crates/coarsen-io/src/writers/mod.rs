//! Writers: graph serializers for per-level artifacts.
//!
//! 3 formats: ncol, pajek, gml.

pub mod gml;
pub mod ncol;
pub mod pajek;

use std::path::Path;

use coarsen_core::errors::FormatError;
use coarsen_core::types::OutputFormat;
use coarsen_engine::MultiLayerGraph;

/// Trait for graph serialization.
pub trait GraphWriter: Send + Sync {
    fn format(&self) -> OutputFormat;
    fn render(&self, graph: &MultiLayerGraph) -> String;

    fn write(&self, graph: &MultiLayerGraph, path: &Path) -> Result<(), FormatError> {
        std::fs::write(path, self.render(graph)).map_err(|e| FormatError::io(path, e))
    }
}

/// Create a writer for `format`.
pub fn create_writer(format: OutputFormat) -> Box<dyn GraphWriter> {
    match format {
        OutputFormat::Ncol => Box::new(ncol::NcolWriter),
        OutputFormat::Gml => Box::new(gml::GmlWriter::default()),
        OutputFormat::Pajek => Box::new(pajek::PajekWriter),
    }
}

/// Shortest decimal form of a weight: `2` rather than `2.0`.
pub(crate) fn fmt_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{weight}")
    }
}
