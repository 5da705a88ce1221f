use tracing::error;

use crate::{
    error::{GraphError, Result},
    search::{
        BitsetGraph,
        graph_algo::{CycleDetector, FrontierBfs, MemoizedDfs},
    },
    statistics::TraversalStats,
};

/// Which detector answers `is_dag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DetectorMode {
    /// Depth-first with a shared reachability table
    Memoized,
    /// Frontier expansion from every vertex, nothing shared
    Frontier,
    /// Run both and require them to agree
    Both,
}

impl DetectorMode {
    /// Runs the selected detector(s) on `graph`.
    ///
    /// # Errors
    /// [`GraphError::DetectorMismatch`] if `Both` is selected and the detectors disagree.
    pub fn run(self, graph: &BitsetGraph, stats: &mut TraversalStats) -> Result<bool> {
        match self {
            DetectorMode::Memoized => Ok(MemoizedDfs.is_dag_with_stats(graph, stats)),
            DetectorMode::Frontier => Ok(FrontierBfs.is_dag_with_stats(graph, stats)),
            DetectorMode::Both => {
                let memoized = MemoizedDfs.is_dag_with_stats(graph, stats);
                let frontier = FrontierBfs.is_dag_with_stats(graph, stats);
                if memoized == frontier {
                    Ok(memoized)
                } else {
                    error!(memoized, frontier, graph = ?graph.raw_masks(), "detectors disagree");
                    Err(GraphError::DetectorMismatch { memoized, frontier })
                }
            }
        }
    }
}
