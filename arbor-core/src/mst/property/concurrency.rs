//! Property 3: Determinism under repetition and shared access.
//!
//! Runs each engine repeatedly, then concurrently from several scoped
//! threads sharing one `&Graph`, and asserts that the edge list, total
//! weight, and operation count are identical across all runs.

use std::thread;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, KruskalEngine, MstAlgorithm, MstError, MstResult, PrimEngine};

use super::types::{ConcurrencyConfig, GraphFixture};

/// Runs the determinism property for the given fixture.
///
/// The thread count is controlled by [`ConcurrencyConfig`].
pub(super) fn run_concurrency_safety_property(fixture: &GraphFixture) -> TestCaseResult {
    let config = ConcurrencyConfig::load();
    let graph = fixture.graph();
    let engines: [&(dyn MstAlgorithm + Sync); 2] = [&KruskalEngine::new(), &PrimEngine::new()];

    for engine in engines {
        let baseline = run(engine, &graph, fixture)?;

        for run_index in 1..config.threads {
            let again = run(engine, &graph, fixture)?;
            compare(&baseline, &again, &format!("sequential run {run_index}"), fixture)?;
        }

        let concurrent: Vec<Result<MstResult, MstError>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..config.threads)
                .map(|_| scope.spawn(|| engine.calculate(&graph)))
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        for (thread_index, outcome) in concurrent.into_iter().enumerate() {
            let result = outcome.map_err(|e| {
                TestCaseError::fail(format!(
                    "thread {thread_index}: {} failed: {e} ({})",
                    engine.algorithm(),
                    fixture.describe(),
                ))
            })?;
            compare(&baseline, &result, &format!("thread {thread_index}"), fixture)?;
        }
    }

    Ok(())
}

fn run(
    engine: &dyn MstAlgorithm,
    graph: &Graph,
    fixture: &GraphFixture,
) -> Result<MstResult, TestCaseError> {
    engine.calculate(graph).map_err(|e| {
        TestCaseError::fail(format!(
            "{} failed: {e} ({})",
            engine.algorithm(),
            fixture.describe(),
        ))
    })
}

fn compare(
    baseline: &MstResult,
    other: &MstResult,
    label: &str,
    fixture: &GraphFixture,
) -> TestCaseResult {
    let algorithm = baseline.algorithm();
    if other.total_weight() != baseline.total_weight() {
        return Err(TestCaseError::fail(format!(
            "{algorithm} {label}: total weight diverged, baseline={}, run={} ({})",
            baseline.total_weight(),
            other.total_weight(),
            fixture.describe(),
        )));
    }
    if other.operation_count() != baseline.operation_count() {
        return Err(TestCaseError::fail(format!(
            "{algorithm} {label}: operation count diverged, baseline={}, run={} ({})",
            baseline.operation_count(),
            other.operation_count(),
            fixture.describe(),
        )));
    }
    // Exact edge-list equality is the strongest determinism check.
    if other.edges() != baseline.edges() {
        return Err(TestCaseError::fail(format!(
            "{algorithm} {label}: edge list differs from baseline ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
