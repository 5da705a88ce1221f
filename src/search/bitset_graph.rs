use std::{fmt, ops::Range};

use crate::{
    error::{GraphError, Result},
    sets::{Mask32, VisitorSet},
};

/// Largest vertex count a [`BitsetGraph`] can hold: one bit per vertex in a `u32` mask.
pub const MAX_VERTICES: usize = Mask32::WIDTH;

/// A directed graph of at most 32 vertices, stored as one out-edge mask per vertex.
///
/// # Invariants
/// - `1 <= len() <= MAX_VERTICES`.
/// - `edges(v)` has bit `w` set iff the edge `v -> w` exists.
/// - No edge mask has a bit at or beyond `len()`.
///
/// The graph cannot be mutated once built, so detectors only ever borrow it.
///
/// # Examples
///
/// ```
/// use bitmask_dag::search::BitsetGraph;
///
/// // 0 -> 1 -> 2 -> 0
/// let graph = BitsetGraph::from_masks(&[0b010, 0b100, 0b001]).unwrap();
/// assert_eq!(graph.len(), 3);
/// assert!(graph.has_edge(2, 0));
/// assert!(!graph.has_self_loop(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitsetGraph {
    edges: Box<[Mask32]>,
}

impl BitsetGraph {
    /// Builds a graph of `n_vertices` vertices from their out-edge masks.
    ///
    /// # Errors
    /// - [`GraphError::InvalidSize`] if `n_vertices` is 0 or above [`MAX_VERTICES`].
    /// - [`GraphError::MaskCountMismatch`] if `edges.len() != n_vertices`.
    /// - [`GraphError::InvalidEdge`] if a mask names a vertex `>= n_vertices`.
    pub fn new(n_vertices: usize, edges: &[u32]) -> Result<Self> {
        if n_vertices == 0 || n_vertices > MAX_VERTICES {
            return Err(GraphError::InvalidSize { n_vertices });
        }
        if edges.len() != n_vertices {
            return Err(GraphError::MaskCountMismatch {
                n_vertices,
                masks: edges.len(),
            });
        }

        let edges = edges
            .iter()
            .enumerate()
            .map(|(vertex, &mask)| {
                let mask = Mask32::from_bits(mask);
                if mask.fits_within(n_vertices) {
                    Ok(mask)
                } else {
                    Err(GraphError::InvalidEdge {
                        vertex,
                        mask: mask.bits(),
                        n_vertices,
                    })
                }
            })
            .collect::<Result<Box<[Mask32]>>>()?;

        Ok(BitsetGraph { edges })
    }

    /// Builds a graph with one vertex per mask.
    pub fn from_masks(edges: &[u32]) -> Result<Self> {
        Self::new(edges.len(), edges)
    }

    /// A graph of `n_vertices` vertices and no edges.
    pub fn edgeless(n_vertices: usize) -> Result<Self> {
        if n_vertices == 0 || n_vertices > MAX_VERTICES {
            return Err(GraphError::InvalidSize { n_vertices });
        }
        Self::new(n_vertices, &vec![0; n_vertices])
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.edges.len()
    }

    /// Out-edges of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex >= len()`.
    pub fn edges(&self, vertex: usize) -> Mask32 {
        self.edges[vertex]
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges[from].get(to)
    }

    pub fn has_self_loop(&self, vertex: usize) -> bool {
        self.has_edge(vertex, vertex)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|mask| mask.len()).sum()
    }

    pub fn raw_masks(&self) -> Vec<u32> {
        self.edges.iter().map(|mask| mask.bits()).collect()
    }
}

/// One line per vertex: index, `n`-wide binary mask (vertex 0 rightmost), successor list.
impl fmt::Display for BitsetGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.len();
        let index_width = (width - 1).to_string().len();
        writeln!(f, "digraph with {} vertices", width)?;
        for vertex in self.vertices() {
            let mask = self.edges(vertex);
            write!(f, "  {vertex:>index_width$}: {mask:0width$b} ->")?;
            for next in mask {
                write!(f, " {next}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
