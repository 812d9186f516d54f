//! Benchmark support crate for treecut.
//!
//! Provides synthetic point sets and parameter types used by the Criterion
//! benchmarks for spanning tree construction and cluster extraction.

pub mod error;
pub mod params;
pub mod source;
