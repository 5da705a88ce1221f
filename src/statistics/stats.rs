#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStats {
    roots: usize,
    expansions: usize,
    memo_hits: usize,
}

impl TraversalStats {
    pub fn new() -> Self {
        TraversalStats {
            roots: 0,
            expansions: 0,
            memo_hits: 0,
        }
    }

    /// Record that a new top-level vertex started its own traversal pass
    pub fn bump_roots(&mut self) {
        self.roots += 1
    }

    /// Record that a vertex had its successors merged into the traversal state
    pub fn bump_expansions(&mut self) {
        self.expansions += 1
    }

    /// Record that an exploration was skipped because the vertex's reachable set was
    /// already complete
    pub fn bump_memo_hits(&mut self) {
        self.memo_hits += 1
    }

    pub fn get_roots(&self) -> usize {
        self.roots
    }

    pub fn get_expansions(&self) -> usize {
        self.expansions
    }

    pub fn get_memo_hits(&self) -> usize {
        self.memo_hits
    }

    pub fn merge(&self, other: &TraversalStats) -> TraversalStats {
        TraversalStats {
            roots: self.roots + other.roots,
            expansions: self.expansions + other.expansions,
            memo_hits: self.memo_hits + other.memo_hits,
        }
    }
}

impl Default for TraversalStats {
    fn default() -> Self {
        TraversalStats::new()
    }
}
