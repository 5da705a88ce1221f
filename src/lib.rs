//! Acyclicity checks for digraphs of at most 32 vertices, with one bitmask of out-edges
//! per vertex.
//!
//! ```
//! use bitmask_dag::search::{BitsetGraph, graph_algo::{CycleDetector, FrontierBfs, MemoizedDfs}};
//!
//! // 0 -> 1, 0 -> 2, 1 -> 2
//! let graph = BitsetGraph::from_masks(&[0b110, 0b100, 0b000]).unwrap();
//! assert!(MemoizedDfs.is_dag(&graph));
//! assert!(FrontierBfs.is_dag(&graph));
//! ```

pub mod error;
pub mod fs;
pub mod search;
pub mod sets;
pub mod statistics;
