//! Property-based tests for the Prim spanning tree builder.
//!
//! Verifies the builder against a sequential Kruskal oracle and, on tiny
//! graphs, against exhaustive enumeration of every spanning tree. Structural
//! invariants (edge count, acyclicity, provenance) and the determinism of the
//! tie-break rule are checked across weight distributions.

mod enumeration;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
