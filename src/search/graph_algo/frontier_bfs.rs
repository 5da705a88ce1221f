use tracing::{debug, trace};

use crate::{
    search::{BitsetGraph, graph_algo::CycleDetector},
    sets::{Mask32, VisitorSet},
    statistics::TraversalStats,
};

/// Frontier-expansion cycle detection with no state shared between top-level vertices.
///
/// For every vertex `v`, the reachable set of `v` is rebuilt from scratch by draining a
/// frontier seeded with `v`'s direct successors. The graph has a cycle iff some `v` finds
/// itself in its own reachable set.
///
/// Does strictly more work than [`MemoizedDfs`](super::MemoizedDfs) on graphs with shared
/// substructure, since nothing carries over from one root to the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontierBfs;

impl FrontierBfs {
    /// Every vertex reachable from `root` through one or more edges.
    pub fn reachable_from(
        graph: &BitsetGraph,
        root: usize,
        stats: &mut TraversalStats,
    ) -> Mask32 {
        stats.bump_roots();
        let mut pass = FrontierPass::seeded(graph, root);
        pass.drain(stats);
        pass.current_map
    }
}

impl CycleDetector for FrontierBfs {
    fn name(&self) -> &'static str {
        "frontier-bfs"
    }

    fn is_dag_with_stats(&self, graph: &BitsetGraph, stats: &mut TraversalStats) -> bool {
        for root in graph.vertices() {
            if Self::reachable_from(graph, root, stats).get(root) {
                debug!(root, detector = self.name(), "cycle found");
                return false;
            }
        }
        true
    }
}

struct FrontierPass<'g> {
    graph: &'g BitsetGraph,
    /// discovered, waiting to be expanded
    gray: Mask32,
    /// expanded during this pass
    black: Mask32,
    current_map: Mask32,
}

impl<'g> FrontierPass<'g> {
    fn seeded(graph: &'g BitsetGraph, root: usize) -> Self {
        let successors = graph.edges(root);
        FrontierPass {
            graph,
            gray: successors,
            black: Mask32::EMPTY,
            current_map: successors,
        }
    }

    fn pending(&self) -> Mask32 {
        self.gray.difference(self.black)
    }

    /// Expands the lowest pending frontier vertex until none is left.
    fn drain(&mut self, stats: &mut TraversalStats) {
        while let Some(next) = self.pending().first() {
            self.gray.unset(next);
            self.expand(next, stats);
        }
    }

    fn expand(&mut self, vertex: usize, stats: &mut TraversalStats) {
        stats.bump_expansions();
        self.black.set(vertex);

        let successors = self.graph.edges(vertex);
        self.current_map |= successors;
        self.gray |= successors.difference(self.black);

        trace!(
            vertex,
            gray = ?self.gray,
            black = ?self.black,
            current_map = ?self.current_map,
            "expanding frontier vertex"
        );

        self.drain(stats);
    }
}
