use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::Result,
    search::{BitsetGraph, MAX_VERTICES},
};

impl BitsetGraph {
    /// A random graph where each of the `n * n` possible edges (self-loops included) exists
    /// with probability `edge_probability`. Deterministic for a given `seed`.
    ///
    /// `edge_probability` is clamped to `[0, 1]`.
    pub fn random_seeded(n_vertices: usize, edge_probability: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_with_rng(n_vertices, edge_probability, &mut rng)
    }

    pub fn random_with_rng<R: Rng + ?Sized>(
        n_vertices: usize,
        edge_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Self::random_masks(n_vertices, edge_probability, rng, |_, _| true)
    }

    /// A random acyclic graph: only edges `i -> j` with `i < j` are drawn.
    pub fn random_dag_with_rng<R: Rng + ?Sized>(
        n_vertices: usize,
        edge_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Self::random_masks(n_vertices, edge_probability, rng, |from, to| from < to)
    }

    fn random_masks<R: Rng + ?Sized>(
        n_vertices: usize,
        edge_probability: f64,
        rng: &mut R,
        allowed: impl Fn(usize, usize) -> bool,
    ) -> Result<Self> {
        let p = edge_probability.clamp(0.0, 1.0);
        // out-of-range sizes are rejected by `new`; never draw past the mask width
        let width = n_vertices.min(MAX_VERTICES);
        let mut masks = vec![0u32; width];
        for (from, mask) in masks.iter_mut().enumerate() {
            for to in 0..width {
                if allowed(from, to) && rng.random_bool(p) {
                    *mask |= 1u32 << to;
                }
            }
        }
        Self::new(n_vertices, &masks)
    }
}
