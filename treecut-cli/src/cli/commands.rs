//! Command implementations and argument parsing for the treecut CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use treecut_core::{
    ClusteringOutcome, ClusteringQualityScore, CutStrategy, LabeledDataset, TreecutBuilder,
    TreecutError, ValidationError, clustering_quality_score, positional_agreement,
};

use crate::dataset::{Dataset, DatasetError};
use crate::render::{RenderError, render_svg};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "treecut",
    about = "Cluster points by cutting their minimum spanning tree."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster a labelled dataset and score the result against its labels.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
#[command(group(
    ArgGroup::new("cut")
        .required(true)
        .args(["clusters", "threshold"]),
))]
pub struct RunCommand {
    /// Path to the whitespace-separated dataset file.
    pub path: PathBuf,

    /// Cut the spanning tree into exactly this many clusters.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub clusters: Option<usize>,

    /// Remove heavy edges until the coefficient of variation of the remaining
    /// tree weights is at most this value.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Write an SVG scatter plot of the clusters to this path.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

impl RunCommand {
    fn strategy(&self) -> Result<CutStrategy, CliError> {
        match (self.clusters, self.threshold) {
            (Some(count), None) => Ok(CutStrategy::ClusterCount(count)),
            (None, Some(threshold)) => Ok(CutStrategy::VariationThreshold(threshold)),
            _ => Err(CliError::AmbiguousStrategy),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input or output path.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Neither or both of `--clusters` and `--threshold` were supplied.
    #[error("exactly one of --clusters or --threshold must be supplied")]
    AmbiguousStrategy,
    /// The dataset could not be parsed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// Core orchestration failed.
    #[error(transparent)]
    Core(#[from] TreecutError),
    /// Scoring against the labels failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Writing the plot failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the dataset.
    pub data_source: String,
    /// Strategy used to cut the tree.
    pub strategy: CutStrategy,
    /// Clusters and the tree they were cut from.
    pub outcome: ClusteringOutcome,
    /// Ground-truth labels read from the dataset.
    pub labels: LabeledDataset,
    /// Per label group, members found in the cluster at the same position.
    pub agreement: Vec<usize>,
    /// ARI and NMI against the labels.
    pub quality: ClusteringQualityScore,
    /// Where the plot was written, if requested.
    pub svg: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, clustering, scoring or plotting fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use treecut_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4 1\n0.0 a\n1.0 a\n9.0 b\n10.0 b\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         clusters: Some(2),
///         threshold: None,
///         svg: None,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome.clustering().len(), 2);
/// assert_eq!(summary.agreement, vec![2, 2]);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
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
    fields(path = %command.path.display(), strategy = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let strategy = command.strategy()?;
    Span::current().record("strategy", field::debug(strategy));
    let treecut = TreecutBuilder::new().with_strategy(strategy).build()?;

    let data_source = derive_data_source_name(&command.path, command.name.as_deref());
    let reader = open_dataset(&command.path)?;
    let dataset = Dataset::try_from_reader(&data_source, reader)?;

    let outcome = treecut.run_points(dataset.points())?;
    let agreement = positional_agreement(dataset.labels(), outcome.clustering())?;
    let quality = clustering_quality_score(dataset.labels(), outcome.clustering())?;

    if let Some(path) = &command.svg {
        write_svg(path, &dataset, &outcome)?;
    }

    info!(
        data_source = data_source.as_str(),
        clusters = outcome.clustering().len(),
        ari = quality.ari,
        nmi = quality.nmi,
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source,
        strategy,
        outcome,
        labels: dataset.labels().clone(),
        agreement,
        quality,
        svg: command.svg,
    })
}

#[instrument(name = "cli.open_dataset", err)]
pub(super) fn open_dataset(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[instrument(name = "cli.write_svg", err, skip(dataset, outcome))]
fn write_svg(path: &Path, dataset: &Dataset, outcome: &ClusteringOutcome) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render_svg(dataset.points(), outcome.clustering(), &mut writer)?;
    writer.flush().map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

fn render_strategy(strategy: CutStrategy) -> String {
    match strategy {
        CutStrategy::ClusterCount(count) => format!("{count} clusters"),
        CutStrategy::VariationThreshold(threshold) => format!("variation threshold {threshold}"),
    }
}

fn render_members(members: &[usize]) -> String {
    members
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let clustering = summary.outcome.clustering();
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "strategy: {}", render_strategy(summary.strategy))?;
    writeln!(writer, "tree weight: {:.6}", summary.outcome.tree_weight())?;
    writeln!(writer, "removed edges: {}", summary.outcome.removed_edges())?;
    if let Some(stop) = summary.outcome.variation_stop() {
        writeln!(writer, "stopped: {}", stop.as_str())?;
    }
    writeln!(writer, "clusters: {}", clustering.len())?;
    for (index, cluster) in clustering.clusters().iter().enumerate() {
        writeln!(
            writer,
            "{index}\t{}\t{}",
            cluster.len(),
            render_members(cluster.members())
        )?;
    }

    writeln!(writer, "positional agreement:")?;
    let groups = summary
        .labels
        .label_names()
        .iter()
        .zip(summary.labels.groups());
    for ((name, group), matched) in groups.zip(&summary.agreement) {
        writeln!(writer, "{name}\t{matched}/{}", group.len())?;
    }
    writeln!(writer, "ari: {:.4}", summary.quality.ari)?;
    writeln!(writer, "nmi: {:.4}", summary.quality.nmi)?;
    if let Some(path) = &summary.svg {
        writeln!(writer, "svg: {}", path.display())?;
    }
    Ok(())
}
