//! Per-level artifacts: `<prefix><key>.conf`, `<prefix><key>.<ext>` and
//! `<prefix><key>.cluster`, where `key` is the level vector joined by `-`.

pub mod metadata;

use std::path::PathBuf;

use coarsen_core::constants::LEVEL_KEY_SEPARATOR;
use coarsen_core::errors::FormatError;
use coarsen_engine::{MultiLayerGraph, Snapshot};

use crate::paths::OutputPaths;
use crate::writers::GraphWriter;

pub use metadata::LevelMetadata;

/// `[1, 0]` → `1-0`.
pub fn level_key(levels: &[u32]) -> String {
    levels
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(LEVEL_KEY_SEPARATOR)
}

/// One line per super-vertex: its level-0 members, space separated.
pub fn render_clusters(graph: &MultiLayerGraph) -> String {
    let mut out = String::new();
    for vertex in graph.vertices() {
        let members: Vec<String> = vertex.original.iter().map(usize::to_string).collect();
        out.push_str(&members.join(" "));
        out.push('\n');
    }
    out
}

/// Write the three artifacts of `snapshot`. Returns the written paths.
pub fn write_level(
    paths: &OutputPaths,
    snapshot: &Snapshot,
    writer: &dyn GraphWriter,
) -> Result<Vec<PathBuf>, FormatError> {
    let key = level_key(&snapshot.levels);

    let conf = paths.file(&format!("{key}.conf"));
    let json = LevelMetadata::of(&snapshot.graph).to_json()?;
    std::fs::write(&conf, json).map_err(|e| FormatError::io(&conf, e))?;

    let graph_file = paths.file(&format!("{key}.{}", writer.format().extension()));
    writer.write(&snapshot.graph, &graph_file)?;

    let cluster = paths.file(&format!("{key}.cluster"));
    std::fs::write(&cluster, render_clusters(&snapshot.graph))
        .map_err(|e| FormatError::io(&cluster, e))?;

    tracing::debug!(key = %key, directory = %paths.directory.display(), "wrote level artifacts");
    Ok(vec![conf, graph_file, cluster])
}

/// Write every retained snapshot, coarsest first.
pub fn write_hierarchy(
    paths: &OutputPaths,
    snapshots: &[Snapshot],
    writer: &dyn GraphWriter,
) -> Result<Vec<PathBuf>, FormatError> {
    let mut written = Vec::with_capacity(snapshots.len() * 3);
    for snapshot in snapshots.iter().rev() {
        written.extend(write_level(paths, snapshot, writer)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_key_joins_with_dash() {
        assert_eq!(level_key(&[1, 0]), "1-0");
        assert_eq!(level_key(&[3]), "3");
        assert_eq!(level_key(&[]), "");
    }

    #[test]
    fn clusters_list_original_members() {
        let g = MultiLayerGraph::from_edges(vec![2, 1], vec![(0, 2, 1.0)]).unwrap();
        assert_eq!(render_clusters(&g), "0\n1\n2\n");
    }
}
