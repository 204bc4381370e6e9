//! Undirected weighted graph consumed by the MST engines.
//!
//! A [`Graph`] keeps two views of the same edges: an adjacency list holding
//! both directed views of every edge, so either endpoint discovers it in
//! constant time, and a flat edge list holding each edge exactly once in the
//! direction it was inserted. Graphs are assembled with [`GraphBuilder`] and
//! are read-only afterwards.

use crate::error::GraphError;

/// Zero-based vertex index in `[0, vertex_count)`.
pub type VertexId = usize;

/// A weighted edge between two vertices.
///
/// Equality is order-sensitive: `(0, 1, 5)` and `(1, 0, 5)` describe the same
/// undirected edge but compare unequal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: i64,
}

impl Edge {
    /// Creates an edge from `from` to `to` with the given weight.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Edge;
    ///
    /// let edge = Edge::new(0, 3, 7);
    /// assert_eq!((edge.from(), edge.to(), edge.weight()), (0, 3, 7));
    /// ```
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId, weight: i64) -> Self {
        Self { from, to, weight }
    }

    /// Returns the endpoint the edge was inserted from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> VertexId { self.from }

    /// Returns the endpoint the edge was inserted to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> VertexId { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns the same edge viewed from the opposite endpoint.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

/// Immutable undirected weighted graph.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph};
///
/// let graph = Graph::from_edges(3, [(0, 1, 2), (2, 1, 5)])?;
/// assert_eq!(graph.edges(), &[Edge::new(0, 1, 2), Edge::new(2, 1, 5)]);
/// assert_eq!(graph.adjacency(1), &[Edge::new(1, 0, 2), Edge::new(1, 2, 5)]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<Edge>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from `(from, to, weight)` triples in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for the first triple whose
    /// endpoint is not below `vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, i64)>,
    {
        let mut builder = GraphBuilder::new(vertex_count);
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of logical edges, one per successful insertion.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the canonical edge list in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns every edge incident to `vertex`, oriented away from it.
    ///
    /// Vertices outside the graph have no incident edges.
    #[must_use]
    pub fn adjacency(&self, vertex: VertexId) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }
}

/// Incrementally assembles a [`Graph`].
///
/// # Examples
/// ```
/// use arbor_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1, 4)?.add_edge(1, 2, 6)?;
/// let graph = builder.build();
/// assert_eq!(graph.edge_count(), 2);
/// assert!(GraphBuilder::new(2).add_edge(0, 2, 1).is_err());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            graph: Graph {
                vertex_count,
                adjacency: vec![Vec::new(); vertex_count],
                edges: Vec::new(),
            },
        }
    }

    /// Appends one undirected edge.
    ///
    /// The edge list records `(from, to, weight)`; the adjacency rows of both
    /// endpoints record the view oriented away from that endpoint. A rejected
    /// edge leaves the builder untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not
    /// below the vertex count.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: i64,
    ) -> Result<&mut Self, GraphError> {
        let vertex_count = self.graph.vertex_count;
        if let Some(vertex) = [from, to].into_iter().find(|v| *v >= vertex_count) {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }

        let edge = Edge::new(from, to, weight);
        self.graph.adjacency[from].push(edge);
        self.graph.adjacency[to].push(edge.reversed());
        self.graph.edges.push(edge);
        Ok(self)
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Graph {
        self.graph
    }
}
