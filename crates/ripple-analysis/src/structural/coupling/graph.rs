//! Graph builder: dependency map → bidirectional dependency graph.

use ripple_core::types::{FxHashMap, FxHashSet};

use super::types::{DependencyGraph, DependencyMap};

/// Build forward and reverse adjacency from a dependency map.
///
/// Keys become the node set. Every import target gets a reverse entry,
/// including targets that are not keys. Self-imports are kept as real
/// edges.
pub fn build_graph(dep_map: &DependencyMap) -> DependencyGraph {
    let nodes: Vec<String> = dep_map.keys().cloned().collect();

    let mut forward: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
    let mut reverse: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();

    for (module, targets) in dep_map {
        forward.insert(module.clone(), targets.iter().cloned().collect());
        reverse.entry(module.clone()).or_default();
    }

    for (module, targets) in dep_map {
        for target in targets {
            reverse
                .entry(target.clone())
                .or_default()
                .insert(module.clone());
        }
    }

    tracing::debug!(
        nodes = nodes.len(),
        reverse_entries = reverse.len(),
        "dependency graph built"
    );

    DependencyGraph {
        nodes,
        forward,
        reverse,
    }
}
