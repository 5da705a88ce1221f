//! Traversal statistics for cycle detection.
//!
//! Counts the top-level passes, vertex expansions and memo short-circuits performed
//! by a detector, so the memoizing and non-memoizing traversals can be compared.

mod stats;
pub use stats::*;
