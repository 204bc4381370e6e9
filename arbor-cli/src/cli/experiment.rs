//! Serde model for experiment input and output documents.
//!
//! Field names follow the camelCase layout consumed by the plotting scripts
//! that read `output.json`.

use std::time::Duration;

use arbor_core::{Edge, MstResult};
use serde::{Deserialize, Serialize};

/// Batch of graphs read from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperimentInput {
    /// Graphs to evaluate, in file order.
    pub graphs: Vec<GraphSpec>,
}

/// One named graph in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphSpec {
    /// Label echoed in the report and summary.
    pub name: String,
    /// Number of vertices.
    pub vertices: usize,
    /// Undirected edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Edge triple as written in the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct EdgeSpec {
    /// First endpoint.
    pub from: usize,
    /// Second endpoint.
    pub to: usize,
    /// Edge weight.
    pub weight: i64,
}

/// Document written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperimentOutput {
    /// One report per input graph, in input order.
    pub results: Vec<GraphReport>,
}

/// Side-by-side outcome of both engines on one graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReport {
    /// Name copied from the input.
    pub graph_name: String,
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Number of edges in the graph.
    pub edges: usize,
    /// Prim's outcome.
    pub prim: AlgorithmReport,
    /// Kruskal's outcome.
    pub kruskal: AlgorithmReport,
}

impl GraphReport {
    /// Returns `true` when both engines found trees of equal weight.
    #[must_use]
    pub fn costs_match(&self) -> bool {
        self.prim.total_cost == self.kruskal.total_cost
    }
}

/// Outcome of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmReport {
    /// Accepted edges rendered as `"from-to"`, in acceptance order.
    pub mst_edges: Vec<String>,
    /// Sum of accepted weights.
    pub total_cost: i64,
    /// Synthetic operation count.
    pub operations: u64,
    /// Wall-clock time in whole milliseconds.
    pub execution_time: u64,
    /// Wall-clock time in microseconds.
    pub execution_time_micros: u64,
}

impl From<&MstResult> for AlgorithmReport {
    fn from(result: &MstResult) -> Self {
        Self {
            mst_edges: result.edges().iter().map(edge_label).collect(),
            total_cost: result.total_weight(),
            operations: result.operation_count(),
            execution_time: millis(result.elapsed()),
            execution_time_micros: micros(result.elapsed()),
        }
    }
}

fn edge_label(edge: &Edge) -> String {
    format!("{}-{}", edge.from(), edge.to())
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
