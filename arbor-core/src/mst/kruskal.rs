//! Kruskal's MST engine.
//!
//! Stable-sorts the edge list by weight, then walks it in order, accepting
//! every edge that joins two different union-find components until the tree
//! holds `vertex_count - 1` edges.

use tracing::{instrument, trace};

use crate::{
    error::MstError,
    graph::{Edge, Graph},
};

use super::{
    Algorithm, DisconnectedPolicy, MstAlgorithm, MstResult, Tally, union_find::DisjointSet,
};

/// Operations charged for visiting an edge in the main loop.
const VISIT_CHARGE: u64 = 1;
/// Extra operations charged when a visited edge joins the tree.
const ACCEPT_CHARGE: u64 = 2;

/// Computes minimum spanning trees with Kruskal's algorithm.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, KruskalEngine};
///
/// let graph = Graph::from_edges(4, [(0, 1, 3), (1, 2, 1), (2, 3, 2), (0, 3, 9)])?;
/// let result = KruskalEngine::new().calculate(&graph)?;
/// assert_eq!(
///     result.edges(),
///     &[Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(0, 1, 3)]
/// );
/// assert_eq!(result.total_weight(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KruskalEngine {
    policy: DisconnectedPolicy,
}

impl KruskalEngine {
    /// Creates an engine that returns partial forests for disconnected
    /// graphs.
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

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// Edges of equal weight keep their insertion order, so repeated runs
    /// accept the same edges and report the same operation count.
    ///
    /// # Errors
    /// Returns [`MstError::Disconnected`] when the graph cannot be spanned
    /// under [`DisconnectedPolicy::Reject`], and [`MstError::WeightOverflow`]
    /// when the total weight overflows an `i64`.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn calculate(&self, graph: &Graph) -> Result<MstResult, MstError> {
        let vertex_count = graph.vertex_count();
        let mut tally = Tally::start(Algorithm::Kruskal, vertex_count);

        let mut sorted: Vec<Edge> = graph.edges().to_vec();
        sorted.sort_by_key(Edge::weight);
        tally.charge(kruskal_sort_charge(sorted.len()));

        let mut components = DisjointSet::new(vertex_count);
        for edge in sorted {
            if tally.is_complete() {
                break;
            }
            tally.charge(VISIT_CHARGE);
            if components.union(edge.from(), edge.to()) {
                tally.charge(ACCEPT_CHARGE);
                tally.accept(edge);
            }
        }

        trace!(components = components.components(), "kruskal sweep finished");
        tally.finish(vertex_count, self.policy)
    }
}

impl MstAlgorithm for KruskalEngine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    fn calculate(&self, graph: &Graph) -> Result<MstResult, MstError> {
        Self::calculate(self, graph)
    }
}

/// Operations charged once for sorting `edge_count` edges.
///
/// Models a comparison sort as `floor(E * ln(E))`; fewer than two edges need
/// no comparisons and cost nothing.
///
/// # Examples
/// ```
/// use arbor_core::kruskal_sort_charge;
///
/// assert_eq!(kruskal_sort_charge(0), 0);
/// assert_eq!(kruskal_sort_charge(1), 0);
/// assert_eq!(kruskal_sort_charge(7), 13);
/// ```
#[must_use]
pub fn kruskal_sort_charge(edge_count: usize) -> u64 {
    if edge_count < 2 {
        return 0;
    }
    let edges = edge_count as f64;
    (edges * edges.ln()).floor() as u64
}
