//! Library components backing the treecut command-line interface.
//!
//! The binary is a thin wrapper around [`cli::run_cli`]; the dataset loader
//! and SVG renderer live here so they can be tested without spawning a
//! process.

pub mod cli;
pub mod dataset;
pub mod logging;
pub mod render;
