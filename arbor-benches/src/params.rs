//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that benchmark
//! identifiers render consistently in Criterion reports.

use std::fmt;

/// How many edges a synthetic graph carries beyond its spanning tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphDensity {
    /// A spanning tree plus two extra edges per vertex.
    Sparse,
    /// A spanning tree plus roughly `sqrt(V)` extra edges per vertex.
    Dense,
}

impl GraphDensity {
    /// Returns the number of extra edges to add for `vertex_count` vertices.
    #[must_use]
    pub fn extra_edges(self, vertex_count: usize) -> usize {
        let per_vertex = match self {
            Self::Sparse => 2,
            Self::Dense => vertex_count.isqrt(),
        };
        vertex_count.saturating_mul(per_vertex)
    }

    /// Returns the label used in benchmark identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        }
    }
}

/// Parameters for an MST benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edge density of the graph.
    pub density: GraphDensity,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.density.as_str())
    }
}
