//! ncol: `u v [weight]` per line, 0-based ids, weight defaulting to 1.
//! Blank lines and lines starting with `#` or `%` are skipped.

use coarsen_core::errors::FormatError;

use super::{parse_token, EdgeList, EdgeRecord};

pub fn parse(text: &str, path: &str) -> Result<EdgeList, FormatError> {
    let mut edges = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }
        edges.push(parse_edge(trimmed, path, line, 0)?);
    }
    Ok(EdgeList {
        declared_vertices: None,
        edges,
    })
}

/// Parse `u v [weight]`, shifting ids down by `base` (1 for pajek).
pub(crate) fn parse_edge(
    text: &str,
    path: &str,
    line: usize,
    base: usize,
) -> Result<EdgeRecord, FormatError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if !(2..=3).contains(&tokens.len()) {
        return Err(FormatError::Parse {
            path: path.to_string(),
            line,
            message: format!("expected 'u v [weight]', found {} fields", tokens.len()),
        });
    }
    let u: usize = parse_token(tokens[0], "vertex id", path, line)?;
    let v: usize = parse_token(tokens[1], "vertex id", path, line)?;
    let weight = match tokens.get(2) {
        Some(token) => parse_token(token, "weight", path, line)?,
        None => 1.0,
    };
    if u < base || v < base {
        return Err(FormatError::Parse {
            path: path.to_string(),
            line,
            message: format!("vertex ids start at {base}"),
        });
    }
    Ok(EdgeRecord {
        line,
        u: u - base,
        v: v - base,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges_and_skips_comments() {
        let text = "# header\n0 3 2.5\n\n% note\n1 3\n";
        let list = parse(text, "g.ncol").unwrap();
        assert_eq!(list.declared_vertices, None);
        assert_eq!(
            list.edges,
            vec![
                EdgeRecord { line: 2, u: 0, v: 3, weight: 2.5 },
                EdgeRecord { line: 5, u: 1, v: 3, weight: 1.0 },
            ]
        );
    }

    #[test]
    fn reports_bad_lines() {
        let err = parse("0 1\n0 x\n", "g.ncol").unwrap_err();
        assert_eq!(err.to_string(), "g.ncol:2: invalid vertex id 'x'");
        let err = parse("0 1 2 3\n", "g.ncol").unwrap_err();
        assert!(err.to_string().contains("found 4 fields"));
        let err = parse("0 1 heavy\n", "g.ncol").unwrap_err();
        assert!(err.to_string().contains("invalid weight 'heavy'"));
    }
}
