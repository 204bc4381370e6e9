//! Property 1: Equivalence with reference oracles.
//!
//! For any generated graph, Kruskal must produce a forest as light as the
//! dense Prim oracle's minimum spanning forest, and Prim must produce a tree
//! as light as the oracle's tree over vertex 0's component. On connected
//! graphs the two engines therefore agree on total weight. Small graphs are
//! additionally checked against exhaustive search.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{KruskalEngine, MstResult, PrimEngine};

use super::helpers::total_weight_wide;
use super::oracle::{dense_prim_forest, exhaustive_forest_weight};
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let (kruskal, prim) = run_engines(fixture)?;
    let oracle = dense_prim_forest(fixture.vertex_count, &fixture.edges);

    check_weight("kruskal", &kruskal, oracle.total_weight, fixture)?;
    check_edge_count("kruskal", &kruskal, oracle.edge_count, fixture)?;

    check_weight("prim", &prim, oracle.start_component_weight, fixture)?;
    check_edge_count(
        "prim",
        &prim,
        oracle.start_component_size.saturating_sub(1),
        fixture,
    )?;

    if oracle.component_count <= 1 && kruskal.total_weight() != prim.total_weight() {
        return Err(TestCaseError::fail(format!(
            "engines disagree on a connected graph: kruskal={}, prim={} ({})",
            kruskal.total_weight(),
            prim.total_weight(),
            fixture.describe(),
        )));
    }

    Ok(())
}

/// Compares Kruskal against exhaustive subset search.
///
/// Only meaningful for fixtures from the small-graph strategy.
pub(super) fn run_exhaustive_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let (kruskal, _) = run_engines(fixture)?;
    let expected = exhaustive_forest_weight(fixture.vertex_count, &fixture.edges);
    check_weight("kruskal", &kruskal, expected, fixture)
}

/// Runs both engines under the default partial policy.
pub(super) fn run_engines(fixture: &GraphFixture) -> Result<(MstResult, MstResult), TestCaseError> {
    let graph = fixture.graph();
    let kruskal = KruskalEngine::new().calculate(&graph).map_err(|e| {
        TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.describe()))
    })?;
    let prim = PrimEngine::new().calculate(&graph).map_err(|e| {
        TestCaseError::fail(format!("prim failed: {e} ({})", fixture.describe()))
    })?;
    Ok((kruskal, prim))
}

fn check_weight(
    engine: &str,
    result: &MstResult,
    expected: i128,
    fixture: &GraphFixture,
) -> TestCaseResult {
    let reported = i128::from(result.total_weight());
    let summed = total_weight_wide(result.edges());
    if reported != summed {
        return Err(TestCaseError::fail(format!(
            "{engine}: reported weight {reported} differs from edge sum {summed} ({})",
            fixture.describe(),
        )));
    }
    if reported != expected {
        return Err(TestCaseError::fail(format!(
            "{engine}: total weight {reported}, oracle {expected} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

fn check_edge_count(
    engine: &str,
    result: &MstResult,
    expected: usize,
    fixture: &GraphFixture,
) -> TestCaseResult {
    if result.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "{engine}: {} edges, oracle {expected} ({})",
            result.edges().len(),
            fixture.describe(),
        )));
    }
    Ok(())
}
