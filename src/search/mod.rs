//! Bitmask digraphs and the traversals that decide whether they are acyclic.
//!
//! # Submodules
//!
//! - [`graph_algo`]: the two cycle detectors and their shared [`CycleDetector`](graph_algo::CycleDetector) trait

pub mod graph_algo;

mod bitset_graph;
mod random_graph;
mod reachability;
mod running_mode;

pub use bitset_graph::*;
pub use reachability::*;
pub use running_mode::*;
