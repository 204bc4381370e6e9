//! Property-based tests for the Kruskal and Prim engines.
//!
//! Verifies both engines against independent oracles (exhaustive search on
//! small graphs, a dense-matrix Prim on larger ones), validates structural
//! invariants (acyclicity, spanning, edge count), and checks that repeated
//! and concurrent runs over a shared graph are bit-identical.

mod concurrency;
mod equivalence;
mod types;
