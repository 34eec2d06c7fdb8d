//! pajek: `*Vertices n`, optional label lines, then `*Edges` (or `*Arcs`)
//! with 1-based `u v [weight]` lines.

use coarsen_core::errors::FormatError;

use super::ncol::parse_edge;
use super::{parse_token, EdgeList};

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Header,
    Vertices,
    Edges,
    Other,
}

pub fn parse(text: &str, path: &str) -> Result<EdgeList, FormatError> {
    let mut list = EdgeList::default();
    let mut section = Section::Header;
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        if let Some(directive) = trimmed.strip_prefix('*') {
            let mut parts = directive.split_whitespace();
            let keyword = parts.next().unwrap_or("").to_ascii_lowercase();
            section = match keyword.as_str() {
                "vertices" => {
                    let count = parts.next().ok_or_else(|| FormatError::Parse {
                        path: path.to_string(),
                        line,
                        message: "*Vertices without a count".to_string(),
                    })?;
                    list.declared_vertices =
                        Some(parse_token(count, "vertex count", path, line)?);
                    Section::Vertices
                }
                "edges" | "arcs" | "edgeslist" | "arcslist" => Section::Edges,
                _ => Section::Other,
            };
            continue;
        }
        match section {
            Section::Edges => list.edges.push(parse_edge(trimmed, path, line, 1)?),
            Section::Vertices | Section::Other => {}
            Section::Header => {
                return Err(FormatError::Parse {
                    path: path.to_string(),
                    line,
                    message: "expected '*Vertices n' before data".to_string(),
                });
            }
        }
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::EdgeRecord;

    #[test]
    fn parses_vertices_and_edges() {
        let text = "*Vertices 4\n1 \"a\"\n2 \"b\"\n*Edges\n1 3 2\n2 4\n";
        let list = parse(text, "g.net").unwrap();
        assert_eq!(list.declared_vertices, Some(4));
        assert_eq!(
            list.edges,
            vec![
                EdgeRecord { line: 5, u: 0, v: 2, weight: 2.0 },
                EdgeRecord { line: 6, u: 1, v: 3, weight: 1.0 },
            ]
        );
    }

    #[test]
    fn rejects_zero_ids_and_missing_header() {
        assert!(parse("*Vertices 2\n*Edges\n0 1\n", "g.net").is_err());
        assert!(parse("1 2\n", "g.net").is_err());
        assert!(parse("*Vertices\n", "g.net").is_err());
    }
}
