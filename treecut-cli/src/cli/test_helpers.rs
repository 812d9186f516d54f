//! Small helpers shared across CLI tests.
//!
//! The tests build temporary dataset files and assert on error handling;
//! these helpers keep the cases short.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, RunCommand};

/// Two well-separated labelled blobs on a line.
pub(super) const TWO_BLOBS: &str = "6 2\n\
    0.0 0.0 left\n\
    0.0 1.0 left\n\
    1.0 0.0 left\n\
    20.0 20.0 right\n\
    20.0 21.0 right\n\
    21.0 20.0 right\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_dataset_file(
    dir: &TempDir,
    name: &str,
    contents: &str,
) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn count_command(path: PathBuf, clusters: usize) -> RunCommand {
    RunCommand {
        path,
        clusters: Some(clusters),
        threshold: None,
        svg: None,
        name: None,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
