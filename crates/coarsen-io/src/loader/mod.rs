//! Edge-list loading into a level-0 [`MultiLayerGraph`].
//!
//! The format is picked from the file extension: `.net` and `.pajek` are
//! read as pajek, everything else as ncol.

pub mod ncol;
pub mod pajek;

use std::path::Path;

use coarsen_core::errors::{CoarsenError, FormatError};
use coarsen_engine::{GraphBuilder, MultiLayerGraph};

/// One parsed edge with the line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub line: usize,
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

/// Parsed content of an input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    /// Vertex count declared by the file, when the format has one.
    pub declared_vertices: Option<usize>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Ncol,
    Pajek,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("net") | Some("pajek") => Self::Pajek,
            _ => Self::Ncol,
        }
    }

    pub fn parse(&self, text: &str, path: &str) -> Result<EdgeList, FormatError> {
        match self {
            Self::Ncol => ncol::parse(text, path),
            Self::Pajek => pajek::parse(text, path),
        }
    }
}

/// Read `path` and build a level-0 graph with the given layer sizes.
pub fn load(path: &Path, layer_sizes: &[usize]) -> Result<MultiLayerGraph, CoarsenError> {
    let text = std::fs::read_to_string(path).map_err(|e| FormatError::io(path, e))?;
    let format = InputFormat::from_path(path);
    let shown = path.display().to_string();
    let list = format.parse(&text, &shown)?;
    let graph = build(&list, layer_sizes, &shown)?;
    tracing::info!(
        path = %shown,
        format = ?format,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Turn parsed records into a graph. Graph-level rejections (out-of-range
/// id, intra-layer edge, self-loop) are reported with their line number.
pub fn build(
    list: &EdgeList,
    layer_sizes: &[usize],
    path: &str,
) -> Result<MultiLayerGraph, FormatError> {
    let total: usize = layer_sizes.iter().sum();
    if let Some(declared) = list.declared_vertices {
        if declared != total {
            return Err(FormatError::Parse {
                path: path.to_string(),
                line: 1,
                message: format!(
                    "file declares {declared} vertices but layers sum to {total}"
                ),
            });
        }
    }
    let mut builder = GraphBuilder::new(layer_sizes.to_vec());
    for record in &list.edges {
        builder
            .add_edge(record.u, record.v, record.weight)
            .map_err(|e| FormatError::Parse {
                path: path.to_string(),
                line: record.line,
                message: e.to_string(),
            })?;
    }
    Ok(builder.build())
}

/// Parse a numeric token, naming `what` on failure.
pub(crate) fn parse_token<T: std::str::FromStr>(
    token: &str,
    what: &str,
    path: &str,
    line: usize,
) -> Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::Parse {
        path: path.to_string(),
        line,
        message: format!("invalid {what} '{token}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.ncol")), InputFormat::Ncol);
        assert_eq!(InputFormat::from_path(Path::new("a.txt")), InputFormat::Ncol);
        assert_eq!(InputFormat::from_path(Path::new("a.NET")), InputFormat::Pajek);
        assert_eq!(InputFormat::from_path(Path::new("a.pajek")), InputFormat::Pajek);
        assert_eq!(InputFormat::from_path(Path::new("noext")), InputFormat::Ncol);
    }

    #[test]
    fn build_reports_line_of_bad_edge() {
        let list = ncol::parse("0 2\n0 1\n", "g.ncol").unwrap();
        let err = build(&list, &[2, 1], "g.ncol").unwrap_err();
        match err {
            FormatError::Parse { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("layer 0"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn build_checks_declared_vertex_count() {
        let list = EdgeList {
            declared_vertices: Some(4),
            edges: Vec::new(),
        };
        assert!(build(&list, &[2, 1], "g.net").is_err());
        assert!(build(&list, &[2, 2], "g.net").is_ok());
    }
}
