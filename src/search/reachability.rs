use crate::{
    search::BitsetGraph,
    sets::{Mask32, VisitorSet},
};

/// Reachability table shared by every top-level pass of the memoized detector.
///
/// Holds `n + 1` masks. Slot `v < n` accumulates every vertex known to be reachable from
/// `v`; slot `n` marks the vertices whose slot is known to be complete.
///
/// # Invariants
/// - Every bit in `reachable_from(v)` is a vertex actually reachable from `v`.
/// - Slots only ever gain bits.
/// - Once `is_complete(v)` holds, `reachable_from(v)` is the full reachable set of `v` and
///   is never modified again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityMemo {
    map_dest: Box<[Mask32]>,
}

impl ReachabilityMemo {
    /// Seeds every slot with the vertex's direct successors; nothing is complete yet.
    pub fn new(graph: &BitsetGraph) -> Self {
        let map_dest = graph
            .vertices()
            .map(|vertex| graph.edges(vertex))
            .chain(std::iter::once(Mask32::EMPTY))
            .collect();
        ReachabilityMemo { map_dest }
    }

    /// Number of vertices covered by the table.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.map_dest.len() - 1
    }

    pub fn reachable_from(&self, vertex: usize) -> Mask32 {
        assert!(vertex < self.len());
        self.map_dest[vertex]
    }

    /// The vertices whose reachable set is complete.
    pub fn completed(&self) -> Mask32 {
        self.map_dest[self.len()]
    }

    pub fn is_complete(&self, vertex: usize) -> bool {
        self.completed().get(vertex)
    }

    pub fn can_reach(&self, from: usize, to: usize) -> bool {
        self.reachable_from(from).get(to)
    }

    /// Returns `true` if `vertex` is known to reach itself.
    pub fn has_cycle_through(&self, vertex: usize) -> bool {
        self.can_reach(vertex, vertex)
    }

    pub(crate) fn absorb(&mut self, vertex: usize, reachable: Mask32) {
        debug_assert!(
            !self.is_complete(vertex) || reachable.is_subset(self.map_dest[vertex]),
            "complete slot {vertex} must not grow"
        );
        self.map_dest[vertex] |= reachable;
    }

    pub(crate) fn mark_complete(&mut self, vertex: usize) {
        let flags = self.len();
        self.map_dest[flags].set(vertex);
    }
}
