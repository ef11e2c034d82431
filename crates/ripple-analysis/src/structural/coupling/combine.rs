//! Cross-layer combination: two layer reports → one weighted summary.

use chrono::Utc;
use ripple_core::constants::{
    COUPLING_INDEX_CE_DIVISOR, COUPLING_INDEX_CYCLES_DIVISOR, COUPLING_INDEX_RIPPLE_DIVISOR,
    CYCLES_PRESENT_PCT,
};

use super::grading::grade_combined;
use super::types::{CombinedReport, CombinedSummary, LayerReport};

/// `(a * a_nodes + b * b_nodes) / (a_nodes + b_nodes)`, 0 when both counts are 0.
pub fn weighted_average(a: f64, a_nodes: usize, b: f64, b_nodes: usize) -> f64 {
    let total = a_nodes + b_nodes;
    if total == 0 {
        return 0.0;
    }
    (a * a_nodes as f64 + b * b_nodes as f64) / total as f64
}

/// `min(1, avgCe/3 + avgRipple/10 + cyclesPct/100)`, never below 0.
///
/// With binary `cyclesPct`, any cycle contributes a full 1.0.
pub fn coupling_index(avg_ce: f64, avg_ripple: f64, cycles_pct: f64) -> f64 {
    let raw = avg_ce / COUPLING_INDEX_CE_DIVISOR
        + avg_ripple / COUPLING_INDEX_RIPPLE_DIVISOR
        + cycles_pct / COUPLING_INDEX_CYCLES_DIVISOR;
    raw.min(1.0).max(0.0)
}

/// Merge the frontend and backend reports.
///
/// Totals are summed, sub-metrics weighted by node count, and a cycle in
/// either layer sets the combined `cyclesPct` to 100. The grade comes from
/// the unrounded index.
pub fn combine(frontend: LayerReport, backend: LayerReport) -> CombinedReport {
    let fe_nodes = frontend.nodes;
    let be_nodes = backend.nodes;
    let weigh = |fe: f64, be: f64| weighted_average(fe, fe_nodes, be, be_nodes);

    let avg_ce = weigh(frontend.avg_ce, backend.avg_ce);
    let avg_ripple = weigh(frontend.avg_ripple, backend.avg_ripple);
    let global_instability = weigh(frontend.global_instability, backend.global_instability);

    let cycles_pct = if frontend.has_cycles() || backend.has_cycles() {
        CYCLES_PRESENT_PCT
    } else {
        0.0
    };

    let index = coupling_index(avg_ce, avg_ripple, cycles_pct);
    let health_grade = grade_combined(index);

    let summary = CombinedSummary {
        nodes: fe_nodes + be_nodes,
        edges: frontend.edges + backend.edges,
        cycles_count: frontend.cycles_count + backend.cycles_count,
        avg_ce,
        avg_ripple,
        global_instability,
        cycles_pct,
        coupling_index: index,
        health_grade,
    };

    tracing::info!(
        nodes = summary.nodes,
        edges = summary.edges,
        coupling_index = index,
        grade = %health_grade,
        "layers combined"
    );

    CombinedReport {
        summary,
        frontend,
        backend,
        generated_at: Utc::now(),
    }
}
