use crate::{search::BitsetGraph, statistics::TraversalStats};

/// A strategy deciding whether a [`BitsetGraph`] is acyclic.
///
/// Implementations are total over valid graphs: every call returns a verdict and never
/// mutates the graph. Each call owns its traversal state, so one detector value can be
/// reused across graphs (and threads) freely.
///
/// Implementations include:
/// - [`MemoizedDfs`](super::MemoizedDfs): depth-first, with a reachability table shared
///   across top-level vertices.
/// - [`FrontierBfs`](super::FrontierBfs): frontier expansion from scratch for every
///   top-level vertex.
pub trait CycleDetector {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if `graph` has no directed cycle, recording traversal counters into
    /// `stats`.
    fn is_dag_with_stats(&self, graph: &BitsetGraph, stats: &mut TraversalStats) -> bool;

    fn is_dag(&self, graph: &BitsetGraph) -> bool {
        let mut stats = TraversalStats::new();
        self.is_dag_with_stats(graph, &mut stats)
    }
}
