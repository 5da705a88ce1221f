use serde::{Deserialize, Serialize};

use crate::{error::LoadFailure, search::BitsetGraph};

/// On-disk JSON shape of a graph: `{"n_vertices": 3, "edges": [2, 4, 1]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub n_vertices: usize,
    pub edges: Vec<u32>,
}

impl From<&BitsetGraph> for GraphDocument {
    fn from(graph: &BitsetGraph) -> Self {
        GraphDocument {
            n_vertices: graph.len(),
            edges: graph.raw_masks(),
        }
    }
}

impl TryFrom<GraphDocument> for BitsetGraph {
    type Error = LoadFailure;

    fn try_from(document: GraphDocument) -> Result<Self, LoadFailure> {
        Ok(BitsetGraph::new(document.n_vertices, &document.edges)?)
    }
}

pub fn parse_json(input: &str) -> Result<BitsetGraph, LoadFailure> {
    let document: GraphDocument = serde_json::from_str(input)?;
    BitsetGraph::try_from(document)
}

pub fn render_json(graph: &BitsetGraph) -> String {
    // a struct of a usize and a Vec<u32> always serializes
    serde_json::to_string(&GraphDocument::from(graph)).unwrap_or_default()
}
