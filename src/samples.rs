//! Small sample graphs as adjacency lists for [`Graph::from_adjacency`].
//!
//! [`Graph::from_adjacency`]: crate::Graph::from_adjacency

/// Adjacency list of a graph with vertex ids `0..n`.
pub type Adjacency = Vec<(usize, Vec<usize>)>;

/// A house with a crossed body. Vertices 4 and 5 have odd degree, so the graph
/// has a trail but no circuit.
///
/// ```text
///   0
///  / \
/// 1 - 2
/// |\ /|
/// | 3 |
/// |/ \|
/// 4 - 5
/// ```
pub fn house() -> Adjacency {
    vec![
        (0, vec![1, 2]),
        (1, vec![0, 2, 3, 4]),
        (2, vec![0, 1, 3, 5]),
        (3, vec![1, 2, 4, 5]),
        (4, vec![1, 3, 5]),
        (5, vec![2, 3, 4]),
    ]
}

/// A four-cycle, every vertex has degree two.
///
/// ```text
/// 0 -- 1
/// |    |
/// 2 -- 3
/// ```
pub fn square() -> Adjacency {
    vec![
        (0, vec![1, 2]),
        (1, vec![0, 3]),
        (2, vec![0, 3]),
        (3, vec![1, 2]),
    ]
}

/// A 21-vertex one-stroke drawing puzzle with 34 edges whose trail runs
/// between vertices 4 and 19.
pub fn puzzle() -> Adjacency {
    vec![
        (0, vec![1, 2, 3, 4]),
        (1, vec![0, 2]),
        (2, vec![0, 1]),
        (3, vec![0, 5]),
        (4, vec![0, 5, 11]),
        (5, vec![3, 6, 4, 8, 9, 10]),
        (6, vec![5, 7]),
        (7, vec![6, 8]),
        (8, vec![5, 7, 9, 15]),
        (9, vec![5, 8, 10, 14, 15]),
        (10, vec![5, 9, 11, 13]),
        (11, vec![4, 10, 12]),
        (12, vec![11, 13]),
        (13, vec![10, 11, 12, 14]),
        (14, vec![9, 13]),
        (15, vec![8, 9, 16, 19]),
        (16, vec![9, 15, 17, 18]),
        (17, vec![16, 18]),
        (18, vec![16, 17, 19, 20]),
        (19, vec![15, 18, 20]),
        (20, vec![18, 19]),
    ]
}

/// A cycle through `n` vertices, or an edgeless graph when `n < 3`.
pub fn cycle(n: usize) -> Adjacency {
    (0..n)
        .map(|vertex| {
            let next = if n >= 3 { vec![(vertex + 1) % n] } else { Vec::new() };
            (vertex, next)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Graph;

    #[test]
    fn sample_sizes() {
        let house = Graph::from_adjacency(house()).unwrap();
        assert_eq!((house.vertex_count(), house.edge_count()), (6, 10));

        let square = Graph::from_adjacency(square()).unwrap();
        assert_eq!((square.vertex_count(), square.edge_count()), (4, 4));

        let puzzle = Graph::from_adjacency(puzzle()).unwrap();
        assert_eq!((puzzle.vertex_count(), puzzle.edge_count()), (21, 34));

        let pentagon = Graph::from_adjacency(cycle(5)).unwrap();
        assert_eq!((pentagon.vertex_count(), pentagon.edge_count()), (5, 5));
        assert!(pentagon.vertices().all(|v| pentagon.degree(v) == 2));
        assert_eq!(Graph::from_adjacency(cycle(2)).unwrap().edge_count(), 0);
    }
}
