//! Independent oracles used to check the detectors in tests.

use rand::Rng;

use crate::{
    search::BitsetGraph,
    sets::{Mask32, VisitorSet},
};

/// Transitive closure by fixed-point relaxation: keep folding successor rows into each
/// row until nothing changes.
pub(crate) fn transitive_closure(graph: &BitsetGraph) -> Vec<Mask32> {
    let mut closure: Vec<Mask32> = graph.vertices().map(|v| graph.edges(v)).collect();
    loop {
        let mut changed = false;
        for v in graph.vertices() {
            let mut row = closure[v];
            for w in closure[v] {
                row |= closure[w];
            }
            if row != closure[v] {
                closure[v] = row;
                changed = true;
            }
        }
        if !changed {
            return closure;
        }
    }
}

pub(crate) fn is_dag(graph: &BitsetGraph) -> bool {
    transitive_closure(graph)
        .iter()
        .enumerate()
        .all(|(v, row)| !row.get(v))
}

/// A graph with `1..=max_vertices` vertices and a random edge density.
pub(crate) fn random_graph<R: Rng>(rng: &mut R, max_vertices: usize) -> BitsetGraph {
    let n = rng.random_range(1..=max_vertices);
    // sparse densities are where cycles are rare and interesting
    let density = rng.random_range(0.0..0.5);
    BitsetGraph::random_with_rng(n, density, rng).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_of_ring() {
        let graph = BitsetGraph::from_masks(&[0b010, 0b100, 0b001]).unwrap();
        assert!(transitive_closure(&graph).iter().all(|row| *row == Mask32::below(3)));
        assert!(!is_dag(&graph));
    }

    #[test]
    fn test_closure_of_chain() {
        let graph = BitsetGraph::from_masks(&[0b010, 0b100, 0b000]).unwrap();
        let closure = transitive_closure(&graph);
        assert_eq!(closure[0], Mask32::from_bits(0b110));
        assert_eq!(closure[2], Mask32::EMPTY);
        assert!(is_dag(&graph));
    }
}
