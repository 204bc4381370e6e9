//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use arbor_test_support::ci::property_test_profile::positive_env_override;

use crate::Graph;

/// Shape and weight distribution of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the MST is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Near-complete graph with weights spanning negative and positive values.
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
    /// Parallel edges and self-loops on top of a connected backbone.
    Multigraph,
}

/// Fixture for MST property tests.
///
/// Keeps the raw edge triples next to the distribution that produced them so
/// failures can be diagnosed without re-running the generator.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(from, to, weight)` triples in insertion order.
    pub edges: Vec<(usize, usize, i64)>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Builds the [`Graph`] described by the fixture.
    ///
    /// Generators only emit in-range endpoints, so a construction failure is
    /// a generator bug and panics.
    pub(super) fn graph(&self) -> Graph {
        match Graph::from_edges(self.vertex_count, self.edges.iter().copied()) {
            Ok(graph) => graph,
            Err(err) => panic!("generated fixture is invalid: {err} ({self:?})"),
        }
    }

    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the concurrency property.
///
/// Controls how many threads run each engine against the same shared graph.
pub(super) struct ConcurrencyConfig {
    /// Number of concurrent runs per engine and input.
    pub threads: usize,
}

impl ConcurrencyConfig {
    /// Loads the configuration from environment variables, falling back to
    /// sensible defaults.
    ///
    /// The environment variable `ARBOR_MST_PBT_THREADS` controls the thread
    /// count (default: 4).
    pub(super) fn load() -> Self {
        let threads = positive_env_override("ARBOR_MST_PBT_THREADS", 4);
        Self { threads }
    }
}
