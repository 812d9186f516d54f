//! Command-line interface orchestration for treecut.
//!
//! The `run` command loads a labelled dataset, cuts its minimum spanning tree
//! into clusters, scores the result against the labels, and optionally
//! writes an SVG plot.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
