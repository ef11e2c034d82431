//! Per-node metrics: Ca, Ce, instability, and ripple size.

use ripple_core::types::{BTreeMap, FxHashSet};

use super::types::{DependencyGraph, NodeMetrics};

/// `I = Ce / (Ca + Ce)`, or 0 for a module with no coupling at all.
pub fn instability(ca: usize, ce: usize) -> f64 {
    let total = ca + ce;
    if total == 0 {
        0.0
    } else {
        ce as f64 / total as f64
    }
}

/// Number of modules transitively reachable from `node` via forward edges.
///
/// Depth-first with an explicit stack; each module is visited at most once.
/// Targets outside the node set are counted but not expanded. `node` itself
/// is never counted, even when a cycle leads back to it.
pub fn ripple(graph: &DependencyGraph, node: &str) -> usize {
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut stack: Vec<&str> = vec![node];

    while let Some(current) = stack.pop() {
        for next in graph.dependencies(current) {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    visited.remove(node);
    visited.len()
}

/// Metrics for one node.
pub fn node_metrics(graph: &DependencyGraph, node: &str) -> NodeMetrics {
    let ca = graph.afferent(node);
    let ce = graph.efferent(node);
    NodeMetrics {
        ca,
        ce,
        instability: instability(ca, ce),
        ripple: ripple(graph, node),
    }
}

/// Metrics for every node in the graph, keyed and ordered by module id.
pub fn compute_node_metrics(graph: &DependencyGraph) -> BTreeMap<String, NodeMetrics> {
    graph
        .nodes
        .iter()
        .map(|node| (node.clone(), node_metrics(graph, node)))
        .collect()
}
