//! Synthetic graphs for benchmarking.
//!
//! Provides [`SyntheticGraphConfig`] and [`generate_graph`], which build a
//! connected weighted [`Graph`] from a seeded RNG: a random spanning tree
//! guarantees connectivity and uniformly drawn extra edges set the density.
//! The same seed always yields the same graph.

use arbor_core::{Graph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::params::GraphDensity;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was not positive.
    #[error("maximum weight must be greater than zero (got {max_weight})")]
    NonPositiveMaxWeight {
        /// The rejected maximum weight.
        max_weight: i64,
    },
    /// The total edge count overflowed `usize`.
    #[error("tree edges plus {extra_edges} extra edges overflows usize")]
    Overflow {
        /// Requested extra edge count.
        extra_edges: usize,
    },
    /// A generated edge was rejected by the graph builder.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Number of random edges added on top of the spanning tree.
    pub extra_edges: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Default upper bound for generated weights.
    pub const DEFAULT_MAX_WEIGHT: i64 = 1_000;

    /// Builds a configuration whose extra edge count follows `density`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_benches::{params::GraphDensity, source::SyntheticGraphConfig};
    ///
    /// let config = SyntheticGraphConfig::with_density(100, GraphDensity::Sparse, 7);
    /// assert_eq!(config.extra_edges, 200);
    /// ```
    #[must_use]
    pub fn with_density(vertex_count: usize, density: GraphDensity, seed: u64) -> Self {
        Self {
            vertex_count,
            extra_edges: density.extra_edges(vertex_count),
            max_weight: Self::DEFAULT_MAX_WEIGHT,
            seed,
        }
    }
}

/// Generates a connected graph from the given configuration.
///
/// Edges are emitted tree-first, then extras; extras may be parallel edges
/// or self-loops, which both engines tolerate.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero,
/// [`SyntheticError::NonPositiveMaxWeight`] if `max_weight < 1`, or
/// [`SyntheticError::Overflow`] if the edge count does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use arbor_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, extra_edges: 5, max_weight: 9, seed: 42 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 9 + 5);
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.max_weight < 1 {
        return Err(SyntheticError::NonPositiveMaxWeight {
            max_weight: config.max_weight,
        });
    }
    let tree_edges = config.vertex_count - 1;
    tree_edges
        .checked_add(config.extra_edges)
        .ok_or(SyntheticError::Overflow {
            extra_edges: config.extra_edges,
        })?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::new();
    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push((parent, vertex, rng.gen_range(1..=config.max_weight)));
    }
    for _ in 0..config.extra_edges {
        let from = rng.gen_range(0..config.vertex_count);
        let to = rng.gen_range(0..config.vertex_count);
        edges.push((from, to, rng.gen_range(1..=config.max_weight)));
    }

    Ok(Graph::from_edges(config.vertex_count, edges)?)
}
