//! File system I/O for loading digraphs.
//!
//! Two formats are supported: a whitespace-separated text format (the default) and a JSON
//! document, picked by the `.json` file extension.

mod json_load;
mod text_load;

pub use json_load::*;
pub use text_load::*;

use std::path::Path;

use tracing::debug;

use crate::{
    error::{LoadFailure, Result},
    search::BitsetGraph,
};

/// A graph that can be read from a file.
pub trait GraphSource: Sized {
    fn load_from_path(path: &Path) -> Result<Self>;
}

impl GraphSource for BitsetGraph {
    /// Reads and validates the graph stored at `path`.
    ///
    /// # Errors
    /// [`GraphError::LoadFailure`](crate::error::GraphError::LoadFailure) carrying the path
    /// and the reason: unreadable file, malformed content, or an invalid graph.
    fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|err| LoadFailure::from(err).at(path))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let graph = if is_json {
            parse_json(&contents)
        } else {
            parse_text(&contents)
        }
        .map_err(|err| err.at(path))?;

        debug!(
            path = %path.display(),
            n_vertices = graph.len(),
            edges = graph.edge_count(),
            "loaded digraph"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::error::GraphError;

    #[test]
    fn test_load_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        fs::write(&path, "3\n0b010\n0b100\n0b001\n").unwrap();

        let graph = BitsetGraph::load_from_path(&path).unwrap();
        assert_eq!(graph.raw_masks(), vec![0b010, 0b100, 0b001]);
    }

    #[test]
    fn test_load_json_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diamond.JSON");
        fs::write(&path, r#"{"n_vertices": 3, "edges": [6, 4, 0]}"#).unwrap();

        let graph = BitsetGraph::load_from_path(&path).unwrap();
        assert_eq!(graph.raw_masks(), vec![0b110, 0b100, 0b000]);
    }

    #[test]
    fn test_json_content_in_text_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diamond.txt");
        fs::write(&path, r#"{"n_vertices": 3, "edges": [6, 4, 0]}"#).unwrap();

        let err = BitsetGraph::load_from_path(&path).unwrap_err();
        assert!(matches!(
            err,
            GraphError::LoadFailure {
                source: LoadFailure::Syntax { line: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = BitsetGraph::load_from_path(&path).unwrap_err();
        match err {
            GraphError::LoadFailure {
                path: reported,
                source: LoadFailure::Io(_),
            } => assert_eq!(reported, path),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_render_and_load_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let graph = BitsetGraph::random_seeded(12, 0.25, 8).unwrap();

        let text_path = dir.path().join("g.txt");
        fs::write(&text_path, render_text(&graph)).unwrap();
        assert_eq!(BitsetGraph::load_from_path(&text_path).unwrap(), graph);

        let json_path = dir.path().join("g.json");
        fs::write(&json_path, render_json(&graph)).unwrap();
        assert_eq!(BitsetGraph::load_from_path(&json_path).unwrap(), graph);
    }
}
