//! Command-line interface orchestration for the arbor MST experiment.
//!
//! The `run` command reads a batch of graphs from JSON, runs Prim's and
//! Kruskal's engines on each, writes a JSON report, and prints a summary.

mod commands;
mod experiment;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, PolicyArg, RunCommand, render_summary, run_cli,
};
pub use experiment::{
    AlgorithmReport, EdgeSpec, ExperimentInput, ExperimentOutput, GraphReport, GraphSpec,
};
