//! Cycle detection strategies.
//!
//! Both strategies implement [`CycleDetector`] and must agree on every valid graph:
//! [`MemoizedDfs`] shares a reachability table across top-level vertices, while
//! [`FrontierBfs`] rebuilds each vertex's reachable set from scratch.

mod cycle_detector;
mod frontier_bfs;
mod memoized_dfs;

#[cfg(test)]
pub(crate) mod reference;

pub use cycle_detector::*;
pub use frontier_bfs::*;
pub use memoized_dfs::*;

use crate::search::BitsetGraph;

/// Returns `true` if `graph` has no directed cycle, using [`MemoizedDfs`].
///
/// # Examples
///
/// ```
/// use bitmask_dag::search::{BitsetGraph, graph_algo::is_dag};
///
/// assert!(is_dag(&BitsetGraph::from_masks(&[0b110, 0b100, 0b000]).unwrap()));
/// assert!(!is_dag(&BitsetGraph::from_masks(&[0b010, 0b100, 0b001]).unwrap()));
/// ```
pub fn is_dag(graph: &BitsetGraph) -> bool {
    MemoizedDfs.is_dag(graph)
}
