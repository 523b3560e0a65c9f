//! Fleury's algorithm for Eulerian circuits and trails.
//!
//! Starting at a suitable vertex, the walk repeatedly crosses one of the edges
//! of the current vertex and deletes it. An edge is only crossed if deleting it
//! keeps the remaining edges in one component, unless it is the last edge of
//! the current vertex. Never burning a bridge that is not forced keeps every
//! remaining edge reachable, so the walk ends only once all edges are used.
//!
//! Each step may probe connectivity once per incident edge, so a run costs
//! *O*(E·(V+E)).
use std::fmt::{self, Display};

use bitvec::prelude::*;
use rand::{rngs::StdRng, seq::IteratorRandom, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, error, trace};

use crate::classify::{classify, Eulerian};
use crate::connectivity::ConnectivityChecker;
use crate::graph::{EdgeError, Graph};
use crate::memory::EntityIndex;
use crate::VertexIndex;

/// Order in which the edges of the current vertex are tried.
///
/// Any order yields a valid Eulerian walk, different orders may yield
/// different walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeOrder {
    /// Shuffle the candidate edges with the builder's random generator.
    #[default]
    Shuffled,
    /// Try the candidate edges in the order they were inserted.
    Insertion,
}

/// Whether a [`Trail`] returns to its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailKind {
    Circuit,
    Open,
}

/// A walk that traverses every edge of a graph exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    vertices: Vec<VertexIndex>,
    kind: TrailKind,
}

impl Trail {
    /// The visited vertices in order, one more than the number of edges.
    #[inline]
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.vertices
    }

    #[inline]
    pub fn kind(&self) -> TrailKind {
        self.kind
    }

    /// Returns the number of visited vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the trail was computed for a graph without vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of traversed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Option<VertexIndex> {
        self.vertices.first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<VertexIndex> {
        self.vertices.last().copied()
    }

    /// Maps the visited vertices to their labels.
    ///
    /// # Panics
    ///
    /// Panics if a vertex of the trail does not exist in `graph`.
    pub fn labels<L: Clone>(&self, graph: &Graph<L>) -> Vec<L> {
        self.vertices
            .iter()
            .map(|&vertex| graph[vertex].clone())
            .collect()
    }

    /// Returns an object that formats the trail as `a -> b -> c` using the
    /// labels in `graph`.
    pub fn display<'a, L: Display>(&'a self, graph: &'a Graph<L>) -> TrailDisplay<'a, L> {
        TrailDisplay { trail: self, graph }
    }

    pub fn into_vertices(self) -> Vec<VertexIndex> {
        self.vertices
    }
}

/// Helper created by [`Trail::display`].
pub struct TrailDisplay<'a, L> {
    trail: &'a Trail,
    graph: &'a Graph<L>,
}

impl<'a, L: Display> Display for TrailDisplay<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &vertex) in self.trail.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", self.graph[vertex])?;
        }
        Ok(())
    }
}

/// Builds Eulerian circuits and trails with Fleury's algorithm.
///
/// The start vertex and, with [`EdgeOrder::Shuffled`], the order in which
/// candidate edges are tried are drawn from the generator `R`. Two builders with
/// identically seeded generators produce the same trail on the same graph.
///
/// # Example
///
/// ```
/// # use fleury::{Fleury, Graph, TrailKind};
/// let mut graph = Graph::from_adjacency(fleury::samples::square()).unwrap();
/// let trail = Fleury::seeded(42).run(&mut graph).unwrap();
/// assert_eq!(trail.kind(), TrailKind::Circuit);
/// assert_eq!(trail.len(), 5);
/// assert_eq!(trail.start(), trail.end());
/// assert!(!graph.has_edges());
/// ```
#[derive(Debug, Clone)]
pub struct Fleury<R> {
    rng: R,
    edge_order: EdgeOrder,
    checker: ConnectivityChecker,
}

impl Fleury<StdRng> {
    /// Creates a builder driven by a [`StdRng`] seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Fleury<R> {
    /// Creates a builder that shuffles candidate edges with `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            edge_order: EdgeOrder::default(),
            checker: ConnectivityChecker::new(),
        }
    }

    /// Sets the order in which the edges of the current vertex are tried.
    pub fn with_edge_order(mut self, edge_order: EdgeOrder) -> Self {
        self.edge_order = edge_order;
        self
    }

    /// Computes an Eulerian circuit or trail, consuming the edges of `graph`.
    ///
    /// Returns `None` and leaves the graph untouched if neither exists. On
    /// success the graph is left without edges; its vertices and labels are
    /// kept. A graph without edges yields a single-vertex circuit, a graph
    /// without vertices an empty one.
    pub fn run<L>(&mut self, graph: &mut Graph<L>) -> Option<Trail> {
        let (kind, start) = match classify(graph) {
            Eulerian::Infeasible => {
                debug!("no eulerian trail exists");
                return None;
            }
            Eulerian::Circuit => {
                let start = graph
                    .vertices()
                    .filter(|&vertex| graph.degree(vertex) > 0)
                    .choose(&mut self.rng)
                    .or_else(|| graph.vertices().choose(&mut self.rng));
                match start {
                    Some(start) => (TrailKind::Circuit, start),
                    None => {
                        return Some(Trail {
                            vertices: Vec::new(),
                            kind: TrailKind::Circuit,
                        })
                    }
                }
            }
            Eulerian::Trail { ends } => (TrailKind::Open, ends[self.rng.gen_range(0..2usize)]),
        };

        debug!(%start, ?kind, edges = graph.edge_count(), "starting walk");

        // Vertices without edges can not be reached and must not count as
        // disconnected. Isolated vertices are finished from the outset.
        let mut finished: BitVec = graph
            .vertices()
            .map(|vertex| graph.degree(vertex) == 0)
            .collect();

        let mut vertices = Vec::with_capacity(graph.edge_count() + 1);
        vertices.push(start);
        let mut current = start;

        while graph.degree(current) > 0 {
            match self.advance(graph, current, &mut finished) {
                Ok(Some(next)) => {
                    vertices.push(next);
                    current = next;
                }
                Ok(None) => {
                    error!(%current, remaining = graph.edge_count(), "every edge is a bridge");
                    debug_assert!(false, "fleury walk got stuck at {current}");
                    return None;
                }
                Err(err) => {
                    error!(%current, %err, "edge of the current vertex could not be removed");
                    debug_assert!(false, "inconsistent neighbours at {current}: {err}");
                    return None;
                }
            }
        }

        debug!(length = vertices.len(), "finished walk");
        Some(Trail { vertices, kind })
    }

    /// Crosses one edge of `current` and returns the vertex on the other side.
    ///
    /// Returns `Ok(None)` if every edge is a bridge while `current` has more
    /// than one, which can not happen on a graph that passed classification.
    /// A bridge that is tried and kept is restored before the next candidate,
    /// so the graph is unchanged unless an edge was crossed.
    fn advance<L>(
        &mut self,
        graph: &mut Graph<L>,
        current: VertexIndex,
        finished: &mut BitSlice,
    ) -> Result<Option<VertexIndex>, EdgeError> {
        let mut candidates = graph.neighbours(current).to_vec();
        if self.edge_order == EdgeOrder::Shuffled {
            candidates.shuffle(&mut self.rng);
        }

        for candidate in candidates {
            graph.remove_edge(current, candidate)?;

            if graph.degree(current) == 0 {
                trace!(%current, %candidate, "forced move");
                finished.set(current.index(), true);
                return Ok(Some(candidate));
            }

            if self.checker.is_connected_from(graph, finished, current) {
                trace!(%current, %candidate, "crossed edge");
                return Ok(Some(candidate));
            }

            trace!(%current, %candidate, "keeping bridge");
            let restored = graph.insert_edge(current, candidate);
            debug_assert!(restored, "bridge {current} - {candidate} was still present");
        }

        Ok(None)
    }
}
