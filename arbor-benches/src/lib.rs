//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks that compare the Kruskal and Prim engines.

pub mod error;
pub mod params;
pub mod source;
