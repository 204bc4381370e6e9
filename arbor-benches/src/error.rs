//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise during benchmark data preparation so
//! that setup functions can propagate failures with `?` instead of using
//! `.expect()`.

use arbor_core::MstError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph configuration was invalid.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// An engine failed during a warm-up run.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
