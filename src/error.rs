//! Error types for graph construction and loading.
//!
//! Validation happens once, when a [`BitsetGraph`](crate::search::BitsetGraph) is built. The
//! detectors themselves never fail on a valid graph.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("vertex count {n_vertices} is outside 1..=32")]
    InvalidSize { n_vertices: usize },

    #[error("graph declares {n_vertices} vertices but {masks} edge masks were supplied")]
    MaskCountMismatch { n_vertices: usize, masks: usize },

    #[error("vertex {vertex} has edge mask {mask:#b} with bits at or beyond vertex count {n_vertices}")]
    InvalidEdge {
        vertex: usize,
        mask: u32,
        n_vertices: usize,
    },

    #[error("{}: {source}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: LoadFailure,
    },

    #[error("detectors disagree: memoized dfs says {memoized}, frontier bfs says {frontier}")]
    DetectorMismatch { memoized: bool, frontier: bool },
}

/// The reason a graph file could not be turned into a graph.
#[derive(Debug, thiserror::Error)]
pub enum LoadFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("missing vertex count")]
    MissingCount,

    #[error("line {line}: cannot parse `{token}` as a number")]
    Syntax { line: usize, token: String },

    #[error("expected {expected} edge masks, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("line {line}: unexpected trailing token `{token}`")]
    Trailing { line: usize, token: String },

    #[error(transparent)]
    Invalid(Box<GraphError>),
}

impl From<GraphError> for LoadFailure {
    fn from(err: GraphError) -> Self {
        LoadFailure::Invalid(Box::new(err))
    }
}

impl LoadFailure {
    pub(crate) fn at(self, path: impl Into<PathBuf>) -> GraphError {
        GraphError::LoadFailure {
            path: path.into(),
            source: self,
        }
    }
}
