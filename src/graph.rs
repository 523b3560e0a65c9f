//! Undirected simple graph with labelled vertices.
use std::fmt::{self, Display};
use std::iter::FusedIterator;

use thiserror::Error;

use crate::memory::EntityIndex;
use crate::VertexIndex;

/// A vertex together with the neighbours it currently shares an edge with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<L> {
    label: L,
    neighbours: Vec<VertexIndex>,
}

/// An undirected graph without self-loops or parallel edges.
///
/// Vertices live in an arena and are addressed by [`VertexIndex`]. There is no
/// edge entity: an edge `{a, b}` exists exactly when `b` is among the neighbours
/// of `a` and `a` is among the neighbours of `b`. Every operation that touches
/// an edge updates both sides, so the graph is symmetric at every observable
/// point.
///
/// Vertices are never removed. Labels are payload only, two vertices may share
/// a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<L> {
    vertices: Vec<Vertex<L>>,
    edge_count: usize,
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Adds an isolated vertex to the graph.
    ///
    /// # Example
    ///
    /// ```
    /// # use fleury::Graph;
    /// let mut graph = Graph::new();
    /// let vertex = graph.add_vertex("a");
    /// assert_eq!(graph[vertex], "a");
    /// assert_eq!(graph.degree(vertex), 0);
    /// ```
    pub fn add_vertex(&mut self, label: L) -> VertexIndex {
        let index = VertexIndex::new(self.vertices.len());
        self.vertices.push(Vertex {
            label,
            neighbours: Vec::new(),
        });
        index
    }

    /// Connects two vertices.
    ///
    /// Returns `false` if the edge was already present, in which case the graph
    /// is unchanged.
    ///
    /// # Errors
    ///
    ///  - When either vertex does not exist.
    ///  - When both endpoints are the same vertex.
    ///
    /// # Example
    ///
    /// ```
    /// # use fleury::Graph;
    /// let mut graph = Graph::new();
    /// let a = graph.add_vertex(());
    /// let b = graph.add_vertex(());
    /// assert_eq!(graph.add_edge(a, b), Ok(true));
    /// assert_eq!(graph.add_edge(b, a), Ok(false));
    /// assert!(graph.add_edge(a, a).is_err());
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn add_edge(&mut self, a: VertexIndex, b: VertexIndex) -> Result<bool, EdgeError> {
        self.check_endpoints(a, b)?;
        Ok(self.insert_edge(a, b))
    }

    /// Connects `vertex` to each of `neighbours`.
    ///
    /// Returns the number of edges that were not present before. Stops at the
    /// first invalid neighbour, keeping the edges inserted up to that point.
    pub fn add_edges<I>(&mut self, vertex: VertexIndex, neighbours: I) -> Result<usize, EdgeError>
    where
        I: IntoIterator<Item = VertexIndex>,
    {
        let mut inserted = 0;
        for neighbour in neighbours {
            if self.add_edge(vertex, neighbour)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Removes the edge between two vertices from both of their neighbour lists.
    ///
    /// # Errors
    ///
    ///  - When either vertex does not exist.
    ///  - When both endpoints are the same vertex.
    ///  - When the vertices are not connected.
    ///
    /// In the case of an error, the graph is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use fleury::{EdgeError, Graph};
    /// let mut graph = Graph::new();
    /// let a = graph.add_vertex(());
    /// let b = graph.add_vertex(());
    /// graph.add_edge(a, b).unwrap();
    /// assert_eq!(graph.remove_edge(b, a), Ok(()));
    /// assert_eq!(graph.remove_edge(a, b), Err(EdgeError::MissingEdge(a, b)));
    /// assert!(!graph.contains_edge(a, b));
    /// ```
    pub fn remove_edge(&mut self, a: VertexIndex, b: VertexIndex) -> Result<(), EdgeError> {
        self.check_endpoints(a, b)?;

        let Some(position_a) = self.position(a, b) else {
            return Err(EdgeError::MissingEdge(a, b));
        };
        let position_b = self.position(b, a);
        debug_assert!(position_b.is_some(), "asymmetric edge {a} - {b}");

        self.vertices[a.index()].neighbours.remove(position_a);
        if let Some(position_b) = position_b {
            self.vertices[b.index()].neighbours.remove(position_b);
        }
        self.edge_count -= 1;

        Ok(())
    }

    /// Returns whether the graph contains a vertex.
    #[inline]
    pub fn contains_vertex(&self, vertex: VertexIndex) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Returns whether two vertices are connected by an edge.
    ///
    /// Returns `false` if either vertex does not exist.
    pub fn contains_edge(&self, a: VertexIndex, b: VertexIndex) -> bool {
        self.contains_vertex(a) && self.position(a, b).is_some()
    }

    /// Returns the vertices currently adjacent to `vertex` in insertion order.
    ///
    /// When the vertex does not exist, this method returns an empty slice.
    pub fn neighbours(&self, vertex: VertexIndex) -> &[VertexIndex] {
        match self.vertices.get(vertex.index()) {
            Some(vertex_data) => &vertex_data.neighbours,
            None => &[],
        }
    }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    #[inline]
    pub fn degree(&self, vertex: VertexIndex) -> usize {
        self.vertices[vertex.index()].neighbours.len()
    }

    /// Returns whether `vertex` has an even number of incident edges.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    #[inline]
    pub fn is_even_degree(&self, vertex: VertexIndex) -> bool {
        self.degree(vertex) % 2 == 0
    }

    /// Borrows the label of a vertex if it exists.
    pub fn label(&self, vertex: VertexIndex) -> Option<&L> {
        Some(&self.vertices.get(vertex.index())?.label)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether any vertex still has an incident edge.
    #[inline]
    pub fn has_edges(&self) -> bool {
        self.edge_count > 0
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the vertex indices in insertion order.
    pub fn vertices(&self) -> Vertices {
        Vertices(0..self.vertices.len())
    }

    /// Iterates over every edge once, as pairs `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.vertices().flat_map(move |a| {
            self.neighbours(a)
                .iter()
                .filter(move |&&b| a < b)
                .map(move |&b| (a, b))
        })
    }

    fn check_endpoints(&self, a: VertexIndex, b: VertexIndex) -> Result<(), EdgeError> {
        if !self.contains_vertex(a) {
            Err(EdgeError::UnknownVertex(a))
        } else if !self.contains_vertex(b) {
            Err(EdgeError::UnknownVertex(b))
        } else if a == b {
            Err(EdgeError::SelfLoop(a))
        } else {
            Ok(())
        }
    }

    /// Inserts an edge between two existing, distinct vertices.
    pub(crate) fn insert_edge(&mut self, a: VertexIndex, b: VertexIndex) -> bool {
        if self.position(a, b).is_some() {
            return false;
        }

        self.vertices[a.index()].neighbours.push(b);
        self.vertices[b.index()].neighbours.push(a);
        self.edge_count += 1;
        true
    }

    #[inline]
    fn position(&self, vertex: VertexIndex, neighbour: VertexIndex) -> Option<usize> {
        self.vertices[vertex.index()]
            .neighbours
            .iter()
            .position(|n| *n == neighbour)
    }
}

impl Graph<String> {
    /// Builds a graph from a mapping of vertex ids to neighbour ids.
    ///
    /// The ids must be exactly `0..n` in any order. Vertex `i` gets the label
    /// `i.to_string()`. An edge only needs to be listed from one of its
    /// endpoints; listing it twice is harmless.
    ///
    /// # Errors
    ///
    /// The whole mapping is validated before any vertex is created, see
    /// [`AdjacencyError`].
    ///
    /// # Example
    ///
    /// ```
    /// # use fleury::Graph;
    /// let graph = Graph::from_adjacency([(1, vec![0]), (0, vec![1, 2]), (2, vec![])]).unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self, AdjacencyError>
    where
        I: IntoIterator<Item = (usize, N)>,
        N: IntoIterator<Item = usize>,
    {
        let mut entries: Vec<(usize, Vec<usize>)> = adjacency
            .into_iter()
            .map(|(vertex, neighbours)| (vertex, neighbours.into_iter().collect()))
            .collect();
        entries.sort_by_key(|(vertex, _)| *vertex);

        for (expected, (vertex, _)) in entries.iter().enumerate() {
            if *vertex < expected {
                return Err(AdjacencyError::DuplicateVertex(*vertex));
            } else if *vertex > expected {
                return Err(AdjacencyError::NonContiguous {
                    expected,
                    found: *vertex,
                });
            }
        }

        let count = entries.len();
        for (vertex, neighbours) in &entries {
            for &neighbour in neighbours {
                if neighbour >= count {
                    return Err(AdjacencyError::UnknownNeighbour {
                        vertex: *vertex,
                        neighbour,
                    });
                } else if neighbour == *vertex {
                    return Err(AdjacencyError::SelfLoop(*vertex));
                }
            }
        }

        let mut graph = Self::with_capacity(count);
        for vertex in 0..count {
            graph.add_vertex(vertex.to_string());
        }
        for (vertex, neighbours) in entries {
            for neighbour in neighbours {
                graph.insert_edge(VertexIndex::new(vertex), VertexIndex::new(neighbour));
            }
        }

        Ok(graph)
    }
}

impl<L: Display> Graph<L> {
    /// Joins the labels of the neighbours of `vertex` with `", "`.
    ///
    /// Returns an empty string for isolated or unknown vertices.
    pub fn neighbour_labels(&self, vertex: VertexIndex) -> String {
        self.neighbours(vertex)
            .iter()
            .map(|neighbour| self.vertices[neighbour.index()].label.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Lists every vertex as `label: neighbour, neighbour` on its own line.
impl<L: Display> Display for Graph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            writeln!(
                f,
                "{}: {}",
                self.vertices[vertex.index()].label,
                self.neighbour_labels(vertex)
            )?;
        }
        Ok(())
    }
}

impl<L> std::ops::Index<VertexIndex> for Graph<L> {
    type Output = L;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index.index()].label
    }
}

impl<L> std::ops::IndexMut<VertexIndex> for Graph<L> {
    fn index_mut(&mut self, index: VertexIndex) -> &mut Self::Output {
        &mut self.vertices[index.index()].label
    }
}

/// Error returned by [`Graph::add_edge`], [`Graph::remove_edge`] and similar methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeError {
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexIndex),
    #[error("self-loop at vertex {0}")]
    SelfLoop(VertexIndex),
    #[error("no edge between {0} and {1}")]
    MissingEdge(VertexIndex, VertexIndex),
}

/// Error returned by [`Graph::from_adjacency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdjacencyError {
    #[error("vertex ids are not contiguous: expected {expected}, found {found}")]
    NonContiguous { expected: usize, found: usize },
    #[error("vertex {0} is listed more than once")]
    DuplicateVertex(usize),
    #[error("vertex {vertex} lists unknown neighbour {neighbour}")]
    UnknownNeighbour { vertex: usize, neighbour: usize },
    #[error("vertex {0} lists itself as a neighbour")]
    SelfLoop(usize),
}

/// Iterator created by [`Graph::vertices`].
#[derive(Debug, Clone)]
pub struct Vertices(std::ops::Range<usize>);

impl Iterator for Vertices {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(VertexIndex::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Vertices {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(VertexIndex::new)
    }
}

impl ExactSizeIterator for Vertices {}
impl FusedIterator for Vertices {}
