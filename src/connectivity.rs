//! Breadth-first connectivity test over the live edges of a graph.
//!
//! Vertices can be excluded from the test. Fleury's algorithm excludes every
//! vertex it has exhausted: such a vertex has no edges left and can never be
//! reached again, but its isolation says nothing about whether the remaining
//! edges still form a single component.
use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::graph::Graph;
use crate::memory::EntityIndex;
use crate::VertexIndex;

/// Reusable breadth-first connectivity checker.
///
/// The visited set and queue are scratch buffers owned by the checker so that
/// repeated probes do not allocate. They are reset at the start of every call;
/// no traversal state survives between calls and the graph is never mutated.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityChecker {
    visited: BitVec,
    queue: VecDeque<VertexIndex>,
}

impl ConnectivityChecker {
    /// Creates a checker with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether every vertex not in `excluded` is reachable from some
    /// non-excluded vertex that still has an edge.
    ///
    /// `excluded` is indexed by [`VertexIndex`]; vertices beyond its length are
    /// not excluded. When no non-excluded vertex has an edge, the graph counts
    /// as connected iff at most one non-excluded vertex remains.
    ///
    /// # Example
    ///
    /// ```
    /// # use fleury::{ConnectivityChecker, Graph};
    /// # use bitvec::prelude::*;
    /// let graph = Graph::from_adjacency([(0, vec![1]), (1, vec![]), (2, vec![])]).unwrap();
    /// let mut checker = ConnectivityChecker::new();
    /// assert!(!checker.is_connected(&graph, BitSlice::empty()));
    /// assert!(checker.is_connected(&graph, bits![0, 0, 1]));
    /// ```
    pub fn is_connected<L>(&mut self, graph: &Graph<L>, excluded: &BitSlice) -> bool {
        let seed = graph
            .vertices()
            .find(|&vertex| !is_excluded(excluded, vertex) && graph.degree(vertex) > 0);

        match seed {
            Some(seed) => self.is_connected_from(graph, excluded, seed),
            None => {
                graph
                    .vertices()
                    .filter(|&vertex| !is_excluded(excluded, vertex))
                    .count()
                    <= 1
            }
        }
    }

    /// Like [`ConnectivityChecker::is_connected`], starting the traversal at `seed`.
    ///
    /// The seed should be a non-excluded vertex with at least one edge. An
    /// isolated seed only reaches itself.
    ///
    /// # Panics
    ///
    /// Panics if `seed` does not exist.
    pub fn is_connected_from<L>(
        &mut self,
        graph: &Graph<L>,
        excluded: &BitSlice,
        seed: VertexIndex,
    ) -> bool {
        self.visited.clear();
        self.visited.resize(graph.vertex_count(), false);
        self.queue.clear();

        self.visited.set(seed.index(), true);
        self.queue.push_back(seed);

        while let Some(vertex) = self.queue.pop_front() {
            for &neighbour in graph.neighbours(vertex) {
                if !self.visited[neighbour.index()] {
                    self.visited.set(neighbour.index(), true);
                    self.queue.push_back(neighbour);
                }
            }
        }

        graph
            .vertices()
            .all(|vertex| self.visited[vertex.index()] || is_excluded(excluded, vertex))
    }
}

/// Convenience wrapper around [`ConnectivityChecker::is_connected`] with
/// fresh buffers.
pub fn is_connected<L>(graph: &Graph<L>, excluded: &BitSlice) -> bool {
    ConnectivityChecker::new().is_connected(graph, excluded)
}

#[inline]
fn is_excluded(excluded: &BitSlice, vertex: VertexIndex) -> bool {
    excluded.get(vertex.index()).map_or(false, |bit| *bit)
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_triangles() -> Graph<String> {
        Graph::from_adjacency([
            (0, vec![1, 2]),
            (1, vec![2]),
            (2, vec![]),
            (3, vec![4, 5]),
            (4, vec![5]),
            (5, vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn connected_cycle() {
        let graph = Graph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![0])]).unwrap();
        assert!(is_connected(&graph, BitSlice::empty()));
    }

    #[test]
    fn disjoint_components() {
        let graph = two_triangles();
        assert!(!is_connected(&graph, BitSlice::empty()));
        assert!(is_connected(&graph, bits![0, 0, 0, 1, 1, 1]));
    }

    #[test]
    fn isolated_vertex_disconnects_unless_excluded() {
        let graph = Graph::from_adjacency([(0, vec![1]), (1, vec![]), (2, vec![])]).unwrap();
        assert!(!is_connected(&graph, BitSlice::empty()));
        assert!(is_connected(&graph, bits![0, 0, 1]));
    }

    #[test]
    fn edgeless_graphs() {
        let single = Graph::from_adjacency([(0, Vec::new())]).unwrap();
        assert!(is_connected(&single, BitSlice::empty()));

        let pair = Graph::from_adjacency([(0, Vec::new()), (1, Vec::new())]).unwrap();
        assert!(!is_connected(&pair, BitSlice::empty()));
        assert!(is_connected(&pair, bits![1, 1]));

        assert!(is_connected(&Graph::<()>::new(), BitSlice::empty()));
    }

    #[test]
    fn seed_choice_does_not_matter() {
        let graph = two_triangles();
        let mut checker = ConnectivityChecker::new();
        for seed in graph.vertices() {
            assert!(!checker.is_connected_from(&graph, BitSlice::empty(), seed));
        }

        let excluded = bits![1, 1, 1, 0, 0, 0];
        for seed in graph.vertices().skip(3) {
            assert!(checker.is_connected_from(&graph, excluded, seed));
        }
    }

    #[test]
    fn follows_live_edges_only() {
        let mut graph = Graph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![])]).unwrap();
        let mut checker = ConnectivityChecker::new();
        assert!(checker.is_connected(&graph, BitSlice::empty()));

        graph
            .remove_edge(VertexIndex::new(1), VertexIndex::new(2))
            .unwrap();
        assert!(!checker.is_connected(&graph, BitSlice::empty()));
        assert!(checker.is_connected(&graph, bits![0, 0, 1]));
    }
}
