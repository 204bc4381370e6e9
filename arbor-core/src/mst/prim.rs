//! Prim's MST engine.
//!
//! Grows a single tree from vertex 0. The frontier is a binary heap of
//! candidate edges keyed by `(weight, discovery sequence)`, so edges of equal
//! weight leave the frontier in the order they were discovered and every run
//! over the same graph is reproducible.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use tracing::{instrument, trace};

use crate::{
    error::MstError,
    graph::{Edge, Graph, VertexId},
};

use super::{Algorithm, DisconnectedPolicy, MstAlgorithm, MstResult, Tally};

/// Vertex the tree grows from.
const START: VertexId = 0;

/// Computes minimum spanning trees with Prim's algorithm.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, PrimEngine};
///
/// let graph = Graph::from_edges(4, [(0, 1, 3), (1, 2, 1), (2, 3, 2), (0, 3, 9)])?;
/// let result = PrimEngine::new().calculate(&graph)?;
/// assert_eq!(
///     result.edges(),
///     &[Edge::new(0, 1, 3), Edge::new(1, 2, 1), Edge::new(2, 3, 2)]
/// );
/// assert_eq!(result.total_weight(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimEngine {
    policy: DisconnectedPolicy,
}

impl PrimEngine {
    /// Creates an engine that returns partial trees for disconnected graphs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: DisconnectedPolicy::Partial,
        }
    }

    /// Overrides how disconnected graphs are reported.
    #[must_use]
    pub const fn with_disconnected_policy(mut self, policy: DisconnectedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured disconnected-graph policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn disconnected_policy(&self) -> DisconnectedPolicy { self.policy }

    /// Computes a minimum spanning tree of `graph`, starting from vertex 0.
    ///
    /// An empty graph yields an empty result. When vertex 0's component does
    /// not cover the whole graph the tree stops at that component.
    ///
    /// # Errors
    /// Returns [`MstError::Disconnected`] when the graph cannot be spanned
    /// under [`DisconnectedPolicy::Reject`], and [`MstError::WeightOverflow`]
    /// when the total weight overflows an `i64`.
    #[instrument(
        name = "mst.prim",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn calculate(&self, graph: &Graph) -> Result<MstResult, MstError> {
        let vertex_count = graph.vertex_count();
        let mut tally = Tally::start(Algorithm::Prim, vertex_count);
        if vertex_count == 0 {
            return tally.finish(vertex_count, self.policy);
        }

        let mut visited = vec![false; vertex_count];
        let mut frontier = Frontier::default();

        visited[START] = true;
        tally.charge(1);
        for edge in graph.adjacency(START) {
            frontier.push(*edge);
            tally.charge(1);
        }

        while !frontier.is_empty() && !tally.is_complete() {
            tally.charge(1);
            let Some(edge) = frontier.pop() else {
                break;
            };
            tally.charge(1);

            let Some(next) = crossing_endpoint(&visited, edge) else {
                continue;
            };
            visited[next] = true;
            tally.charge(1);
            tally.accept(edge);

            for incident in graph.adjacency(next) {
                if !visited[incident.to()] {
                    frontier.push(*incident);
                    tally.charge(1);
                }
            }
        }

        trace!(stale = frontier.len(), "prim frontier drained");
        tally.finish(vertex_count, self.policy)
    }
}

impl MstAlgorithm for PrimEngine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn calculate(&self, graph: &Graph) -> Result<MstResult, MstError> {
        Self::calculate(self, graph)
    }
}

/// Returns the endpoint `edge` would add to the tree, or `None` when the
/// edge does not cross the cut between visited and unvisited vertices.
fn crossing_endpoint(visited: &[bool], edge: Edge) -> Option<VertexId> {
    match (visited[edge.from()], visited[edge.to()]) {
        (true, false) => Some(edge.to()),
        (false, true) => Some(edge.from()),
        _ => None,
    }
}

/// Candidate edge ordered by weight, then by discovery sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FrontierEntry {
    weight: i64,
    sequence: u64,
    edge: Edge,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of crossing-edge candidates.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, edge: Edge) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.heap.push(Reverse(FrontierEntry {
            weight: edge.weight(),
            sequence,
            edge,
        }));
    }

    fn pop(&mut self) -> Option<Edge> {
        self.heap.pop().map(|Reverse(entry)| entry.edge)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
