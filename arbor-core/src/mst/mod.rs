//! Minimum spanning tree (MST) engines.
//!
//! Two independent engines compute an MST of the same [`Graph`]:
//! [`KruskalEngine`] sorts every edge and merges components with a
//! union-find, while [`PrimEngine`] grows a single tree from vertex 0 across
//! a priority frontier. Both report an [`MstResult`] carrying the tree, its
//! weight, a synthetic operation count, and the elapsed wall-clock time.
//!
//! Operation counts are a cost model, not a literal step count. They are
//! accumulated per invocation, so repeated runs over the same graph always
//! agree and concurrent runs cannot interfere.

mod kruskal;
mod prim;
mod union_find;

use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::{debug, warn};

use crate::{
    error::MstError,
    graph::{Edge, Graph},
};

pub use self::{
    kruskal::{KruskalEngine, kruskal_sort_charge},
    prim::PrimEngine,
};

/// Identifies the engine that produced a result or error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Kruskal's edge-sorting algorithm.
    Kruskal,
    /// Prim's frontier-growth algorithm.
    Prim,
}

impl Algorithm {
    /// Returns the lowercase name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an engine reports a graph it cannot span.
///
/// Both engines honour the same policy so their outputs stay comparable.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DisconnectedPolicy {
    /// Return the minimum spanning forest found so far. Callers detect the
    /// condition through [`MstResult::is_spanning_tree`].
    #[default]
    Partial,
    /// Fail with [`MstError::Disconnected`].
    Reject,
}

/// Common interface over the MST engines.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, KruskalEngine, MstAlgorithm, PrimEngine};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// let engines: [&dyn MstAlgorithm; 2] = [&KruskalEngine::new(), &PrimEngine::new()];
/// for engine in engines {
///     let result = engine.calculate(&graph)?;
///     assert_eq!(result.algorithm(), engine.algorithm());
///     assert_eq!(result.total_weight(), 3);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait MstAlgorithm {
    /// Returns which algorithm this engine runs.
    fn algorithm(&self) -> Algorithm;

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError::Disconnected`] when the graph cannot be spanned
    /// and the engine rejects partial results, or
    /// [`MstError::WeightOverflow`] when the total weight overflows.
    fn calculate(&self, graph: &Graph) -> Result<MstResult, MstError>;
}

/// Outcome of a single engine invocation.
///
/// The result owns a snapshot of the accepted edges, in acceptance order; it
/// never borrows from the graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MstResult {
    algorithm: Algorithm,
    vertex_count: usize,
    edges: Vec<Edge>,
    total_weight: i64,
    operation_count: u64,
    elapsed: Duration,
}

impl MstResult {
    /// Returns the engine that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the vertex count of the graph the result spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the synthetic operation count of the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn operation_count(&self) -> u64 { self.operation_count }

    /// Returns the wall-clock time spent in the algorithm body.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns `true` when the edges span every vertex, i.e. there are
    /// exactly `vertex_count - 1` of them.
    ///
    /// Empty and single-vertex graphs are trivially spanned.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Consumes the result, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Per-invocation accumulator shared by both engines.
struct Tally {
    algorithm: Algorithm,
    started: Instant,
    required: usize,
    edges: Vec<Edge>,
    // Widened so the result does not depend on acceptance order.
    total_weight: i128,
    operations: u64,
}

impl Tally {
    fn start(algorithm: Algorithm, vertex_count: usize) -> Self {
        let required = vertex_count.saturating_sub(1);
        Self {
            algorithm,
            started: Instant::now(),
            required,
            edges: Vec::with_capacity(required),
            total_weight: 0,
            operations: 0,
        }
    }

    fn charge(&mut self, operations: u64) {
        self.operations = self.operations.saturating_add(operations);
    }

    fn accept(&mut self, edge: Edge) {
        self.total_weight += i128::from(edge.weight());
        self.edges.push(edge);
    }

    fn is_complete(&self) -> bool {
        self.edges.len() >= self.required
    }

    fn finish(self, vertex_count: usize, policy: DisconnectedPolicy) -> Result<MstResult, MstError> {
        let elapsed = self.started.elapsed();
        let accepted = self.edges.len();

        debug!(
            algorithm = %self.algorithm,
            accepted,
            total_weight = self.total_weight,
            operations = self.operations,
            "mst run completed"
        );

        let total_weight =
            i64::try_from(self.total_weight).map_err(|_| MstError::WeightOverflow {
                algorithm: self.algorithm,
            })?;

        if !self.is_complete() {
            warn!(
                algorithm = %self.algorithm,
                accepted,
                required = self.required,
                policy = ?policy,
                "graph is disconnected; no spanning tree exists"
            );
            if policy == DisconnectedPolicy::Reject {
                return Err(MstError::Disconnected {
                    algorithm: self.algorithm,
                    accepted,
                    required: self.required,
                });
            }
        }

        Ok(MstResult {
            algorithm: self.algorithm,
            vertex_count,
            edges: self.edges,
            total_weight,
            operation_count: self.operations,
            elapsed,
        })
    }
}

#[cfg(test)]
mod property;
