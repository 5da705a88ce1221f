//! Fixed-width vertex sets.
//!
//! Every vertex set in this crate is a single 32-bit word: bit `i` stands for vertex `i`.
//! [`Mask32`] carries the set algebra, and [`VisitorSet`] the per-bit access the
//! traversals use for their visited and frontier bookkeeping.

mod mask32;
mod visitor_set;

pub use mask32::*;
pub use visitor_set::*;
