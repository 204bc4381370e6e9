//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    DisconnectedPolicy, Graph, GraphBuilder, GraphError, KruskalEngine, MstError, PrimEngine,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::experiment::{AlgorithmReport, ExperimentInput, ExperimentOutput, GraphReport, GraphSpec};

const DEFAULT_OUTPUT: &str = "output.json";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compare Prim's and Kruskal's minimum spanning tree engines."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run both engines over every graph in an experiment file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON file holding the graphs to evaluate.
    pub input: PathBuf,

    /// Where to write the JSON report.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// How to treat graphs that have no spanning tree.
    #[arg(long, value_enum, default_value_t = PolicyArg::Partial)]
    pub disconnected: PolicyArg,
}

/// Command-line spelling of [`DisconnectedPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Report the forest or tree fragment that was found.
    Partial,
    /// Fail the run.
    Reject,
}

impl From<PolicyArg> for DisconnectedPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Partial => Self::Partial,
            PolicyArg::Reject => Self::Reject,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading input or writing output.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input was not a valid experiment document, or the report could
    /// not be encoded.
    #[error("invalid JSON in `{path}`: {source}")]
    Json {
        /// File being read or written.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A graph in the input referenced a vertex outside its range.
    #[error("graph `{graph}` is invalid: {source}")]
    Graph {
        /// Name of the offending graph.
        graph: String,
        /// Underlying construction error.
        #[source]
        source: GraphError,
    },
    /// An engine failed on a graph.
    #[error("graph `{graph}` failed: {source}")]
    Mst {
        /// Name of the offending graph.
        graph: String,
        /// Underlying engine error.
        #[source]
        source: MstError,
    },
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph { source, .. } => Some(source.code().as_str()),
            Self::Mst { source, .. } => Some(source.code().as_str()),
            Self::Io { .. } | Self::Json { .. } => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// File the report was written to.
    pub output: PathBuf,
    /// Per-graph reports in input order.
    pub reports: Vec<GraphReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, evaluating, or writing fails. The
/// first failing graph aborts the run and no report is written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, PolicyArg, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("input.json");
/// std::fs::write(
///     &input,
///     r#"{"graphs":[{"name":"pair","vertices":2,"edges":[{"from":0,"to":1,"weight":4}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input,
///         output: dir.path().join("output.json"),
///         disconnected: PolicyArg::Partial,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.reports[0].kruskal.total_cost, 4);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = field::Empty, output = field::Empty, graphs = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("input", field::display(command.input.display()));
    span.record("output", field::display(command.output.display()));

    let input = load_input(&command.input)?;
    span.record("graphs", input.graphs.len());

    let policy = DisconnectedPolicy::from(command.disconnected);
    let reports = input
        .graphs
        .iter()
        .map(|spec| evaluate_graph(spec, policy))
        .collect::<Result<Vec<_>, _>>()?;

    let document = ExperimentOutput { results: reports };
    write_output(&command.output, &document)?;

    info!(
        graphs = document.results.len(),
        output = %command.output.display(),
        "command completed"
    );
    Ok(ExecutionSummary {
        output: command.output,
        reports: document.results,
    })
}

#[instrument(name = "cli.load_input", err, fields(path = field::Empty))]
pub(super) fn load_input(path: &Path) -> Result<ExperimentInput, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(
    name = "cli.evaluate_graph",
    err,
    skip(spec),
    fields(graph = %spec.name, vertices = spec.vertices, edges = spec.edges.len()),
)]
pub(super) fn evaluate_graph(
    spec: &GraphSpec,
    policy: DisconnectedPolicy,
) -> Result<GraphReport, CliError> {
    let graph = build_graph(spec)?;
    let mst_error = |source| CliError::Mst {
        graph: spec.name.clone(),
        source,
    };

    let prim = PrimEngine::new()
        .with_disconnected_policy(policy)
        .calculate(&graph)
        .map_err(mst_error)?;
    let kruskal = KruskalEngine::new()
        .with_disconnected_policy(policy)
        .calculate(&graph)
        .map_err(mst_error)?;

    let report = GraphReport {
        graph_name: spec.name.clone(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        prim: AlgorithmReport::from(&prim),
        kruskal: AlgorithmReport::from(&kruskal),
    };
    info!(
        prim_cost = report.prim.total_cost,
        kruskal_cost = report.kruskal.total_cost,
        matched = report.costs_match(),
        "graph evaluated"
    );
    Ok(report)
}

fn build_graph(spec: &GraphSpec) -> Result<Graph, CliError> {
    let mut builder = GraphBuilder::new(spec.vertices);
    for edge in &spec.edges {
        builder
            .add_edge(edge.from, edge.to, edge.weight)
            .map_err(|source| CliError::Graph {
                graph: spec.name.clone(),
                source,
            })?;
    }
    Ok(builder.build())
}

fn write_output(path: &Path, document: &ExperimentOutput) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for report in &summary.reports {
        writeln!(writer)?;
        writeln!(writer, "=== {} ===", report.graph_name)?;
        writeln!(
            writer,
            "Vertices: {}, Edges: {}",
            report.vertices, report.edges
        )?;
        writeln!(writer, "Prim's MST Cost: {}", report.prim.total_cost)?;
        writeln!(writer, "Kruskal's MST Cost: {}", report.kruskal.total_cost)?;
        writeln!(writer, "Match: {}", report.costs_match())?;
        render_timing(&mut writer, "Prim", &report.prim)?;
        render_timing(&mut writer, "Kruskal", &report.kruskal)?;
    }
    writeln!(writer)?;
    writeln!(writer, "Results written to {}", summary.output.display())
}

fn render_timing(writer: &mut impl Write, label: &str, report: &AlgorithmReport) -> io::Result<()> {
    writeln!(
        writer,
        "{label} time: {}ms ({}us), ops: {}",
        report.execution_time, report.execution_time_micros, report.operations
    )
}
