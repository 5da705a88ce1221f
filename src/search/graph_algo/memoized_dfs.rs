use tracing::{debug, trace};

use crate::{
    search::{BitsetGraph, ReachabilityMemo, graph_algo::CycleDetector},
    sets::{Mask32, VisitorSet},
    statistics::TraversalStats,
};

/// Depth-first cycle detection with a reachability table shared across top-level vertices.
///
/// Every vertex is a top-level root, taken in increasing index order. Each root gets a
/// fresh `gray`/`black` pair, but the [`ReachabilityMemo`] persists for the whole call:
/// a vertex whose reachable set was completed under an earlier root is never re-explored.
/// A cycle exists exactly when some root can reach itself.
///
/// Detection stops at the first such root, which leaves the table partial. Use
/// [`MemoizedDfs::reachability`] when the complete table is wanted instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedDfs;

impl MemoizedDfs {
    /// Computes the complete reachability table of `graph`.
    ///
    /// Runs the same traversal as [`CycleDetector::is_dag`] but never stops early, so on
    /// return every vertex is marked complete and `reachable_from(v)` is exactly the set of
    /// vertices reachable from `v` through one or more edges.
    pub fn reachability(graph: &BitsetGraph) -> ReachabilityMemo {
        let mut stats = TraversalStats::new();
        Self::reachability_with_stats(graph, &mut stats)
    }

    pub fn reachability_with_stats(
        graph: &BitsetGraph,
        stats: &mut TraversalStats,
    ) -> ReachabilityMemo {
        let mut context = TraversalContext::new(graph, stats);
        for root in graph.vertices() {
            context.run_pass(root);
        }
        context.memo
    }
}

impl CycleDetector for MemoizedDfs {
    fn name(&self) -> &'static str {
        "memoized-dfs"
    }

    fn is_dag_with_stats(&self, graph: &BitsetGraph, stats: &mut TraversalStats) -> bool {
        let mut context = TraversalContext::new(graph, stats);

        for root in graph.vertices() {
            // direct self-loop, or a cycle already recorded under an earlier root
            if context.memo.has_cycle_through(root) {
                debug!(root, detector = self.name(), "cycle found before exploring root");
                return false;
            }

            context.run_pass(root);

            if context.memo.has_cycle_through(root) {
                debug!(root, detector = self.name(), "cycle found");
                return false;
            }
        }

        true
    }
}

/// Traversal state threaded through the recursive exploration.
///
/// - `gray`: vertices discovered but not yet expanded in the current pass (a frontier,
///   not the recursion stack).
/// - `black`: vertices expanded in the current pass.
/// - `memo`: reachability accumulated across all passes.
struct TraversalContext<'g, 's> {
    graph: &'g BitsetGraph,
    gray: Mask32,
    black: Mask32,
    memo: ReachabilityMemo,
    stats: &'s mut TraversalStats,
}

impl<'g, 's> TraversalContext<'g, 's> {
    fn new(graph: &'g BitsetGraph, stats: &'s mut TraversalStats) -> Self {
        TraversalContext {
            graph,
            gray: Mask32::EMPTY,
            black: Mask32::EMPTY,
            memo: ReachabilityMemo::new(graph),
            stats,
        }
    }

    /// Explores from `root` with fresh `gray`/`black` sets.
    ///
    /// The depth-first tree grown from `root` covers everything reachable from it, so the
    /// root's slot is complete once the pass returns.
    fn run_pass(&mut self, root: usize) {
        self.stats.bump_roots();
        self.gray = Mask32::EMPTY;
        self.black = Mask32::EMPTY;

        self.explore(root);
        self.memo.mark_complete(root);
    }

    fn explore(&mut self, current: usize) {
        if self.memo.is_complete(current) {
            self.stats.bump_memo_hits();
            return;
        }
        self.stats.bump_expansions();

        let successors = self.graph.edges(current);
        self.black.set(current);
        self.gray = self.gray.union(successors).without(current);
        self.memo.absorb(current, successors);

        trace!(
            current,
            gray = ?self.gray,
            black = ?self.black,
            "expanding vertex"
        );

        for next in successors {
            if self.black.get(next) {
                // re-convergence within this pass: `next` was already expanded (it may still
                // be on the path to `current`), so its slot is folded in as it stands now.
                self.gray.unset(next);
            } else {
                self.explore(next);
            }
            let downstream = self.memo.reachable_from(next);
            self.memo.absorb(current, downstream);
        }

        // A slot built only from complete slots is itself complete. Vertices that reach an
        // unfinished vertex stay open and are recomputed under a later root.
        if successors.is_subset(self.memo.completed()) {
            self.memo.mark_complete(current);
        }
    }
}
