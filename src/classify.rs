//! Existence of Eulerian circuits and trails.
use bitvec::prelude::*;
use tracing::debug;

use crate::connectivity::is_connected;
use crate::graph::Graph;
use crate::VertexIndex;

/// Which kind of Eulerian walk a graph admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eulerian {
    /// Every edge can be traversed once, returning to the start.
    Circuit,
    /// Every edge can be traversed once between the two odd-degree vertices.
    Trail { ends: [VertexIndex; 2] },
    /// Neither a circuit nor a trail exists.
    Infeasible,
}

impl Eulerian {
    /// Whether a circuit or a trail exists.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        !matches!(self, Eulerian::Infeasible)
    }
}

/// Returns whether every vertex has even degree.
///
/// This is the degree condition only, it does not check connectivity. An
/// edgeless graph trivially satisfies it.
pub fn has_eulerian_circuit<L>(graph: &Graph<L>) -> bool {
    graph.vertices().all(|vertex| graph.is_even_degree(vertex))
}

/// Returns whether the graph has exactly zero or exactly two vertices of odd degree.
///
/// This is the degree condition only, it does not check connectivity.
pub fn has_eulerian_trail<L>(graph: &Graph<L>) -> bool {
    matches!(odd_vertices(graph).len(), 0 | 2)
}

/// Collects the vertices of odd degree, stopping after the third one.
pub fn odd_vertices<L>(graph: &Graph<L>) -> Vec<VertexIndex> {
    graph
        .vertices()
        .filter(|&vertex| !graph.is_even_degree(vertex))
        .take(3)
        .collect()
}

/// Decides which kind of Eulerian walk the graph admits.
///
/// Besides the degree condition, all vertices with at least one edge must lie
/// in a single component. Isolated vertices are ignored, so an edgeless graph
/// has a (zero-length) circuit.
///
/// # Example
///
/// ```
/// # use fleury::{classify, Eulerian, Graph};
/// let path = Graph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![])]).unwrap();
/// assert!(matches!(classify(&path), Eulerian::Trail { .. }));
/// ```
pub fn classify<L>(graph: &Graph<L>) -> Eulerian {
    let odd = odd_vertices(graph);
    let candidate = match odd[..] {
        [] => Eulerian::Circuit,
        [a, b] => Eulerian::Trail { ends: [a, b] },
        _ => {
            debug!(odd = odd.len(), "too many odd-degree vertices");
            return Eulerian::Infeasible;
        }
    };

    let isolated: BitVec = graph
        .vertices()
        .map(|vertex| graph.degree(vertex) == 0)
        .collect();
    if !is_connected(graph, &isolated) {
        debug!("edges span more than one component");
        return Eulerian::Infeasible;
    }

    debug!(?candidate, "classified graph");
    candidate
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memory::EntityIndex;
    use crate::samples;
    use rstest::rstest;

    fn graph(adjacency: Vec<(usize, Vec<usize>)>) -> Graph<String> {
        Graph::from_adjacency(adjacency).unwrap()
    }

    #[test]
    fn square_has_circuit() {
        let square = graph(samples::square());
        assert!(has_eulerian_circuit(&square));
        assert!(has_eulerian_trail(&square));
        assert_eq!(classify(&square), Eulerian::Circuit);
    }

    #[test]
    fn path_has_trail_only() {
        let path = graph(vec![(0, vec![1]), (1, vec![2]), (2, vec![])]);
        assert!(!has_eulerian_circuit(&path));
        assert!(has_eulerian_trail(&path));
        assert_eq!(
            classify(&path),
            Eulerian::Trail {
                ends: [VertexIndex::new(0), VertexIndex::new(2)]
            }
        );
    }

    #[test]
    fn star_has_neither() {
        let star = graph(vec![(0, vec![1, 2, 3, 4]), (1, vec![]), (2, vec![]), (3, vec![]), (4, vec![])]);
        assert_eq!(odd_vertices(&star).len(), 3);
        assert!(!has_eulerian_circuit(&star));
        assert!(!has_eulerian_trail(&star));
        assert_eq!(classify(&star), Eulerian::Infeasible);
    }

    #[test]
    fn disjoint_triangles_pass_parity_but_not_classification() {
        let triangles = graph(vec![
            (0, vec![1, 2]),
            (1, vec![2]),
            (2, vec![]),
            (3, vec![4, 5]),
            (4, vec![5]),
            (5, vec![]),
        ]);
        assert!(has_eulerian_circuit(&triangles));
        assert!(has_eulerian_trail(&triangles));
        assert_eq!(classify(&triangles), Eulerian::Infeasible);
        assert!(!classify(&triangles).is_feasible());
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![(0, vec![])])]
    #[case::several(vec![(0, vec![]), (1, vec![]), (2, vec![])])]
    fn edgeless_graphs_have_circuits(#[case] adjacency: Vec<(usize, Vec<usize>)>) {
        let edgeless = graph(adjacency);
        assert!(has_eulerian_circuit(&edgeless));
        assert_eq!(classify(&edgeless), Eulerian::Circuit);
    }

    #[test]
    fn isolated_vertices_are_ignored() {
        let square = graph(vec![(0, vec![1, 2]), (1, vec![3]), (2, vec![3]), (3, vec![]), (4, vec![])]);
        assert_eq!(classify(&square), Eulerian::Circuit);
    }

    #[rstest]
    #[case::house(samples::house(), [4, 5])]
    #[case::puzzle(samples::puzzle(), [4, 19])]
    fn sample_trails(#[case] adjacency: Vec<(usize, Vec<usize>)>, #[case] ends: [usize; 2]) {
        assert_eq!(
            classify(&graph(adjacency)),
            Eulerian::Trail {
                ends: ends.map(VertexIndex::new)
            }
        );
    }
}
