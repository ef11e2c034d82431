//! Fallback cycle detection via Tarjan's SCC.
//!
//! Used only when the extractor supplied no cycle list. Every strongly
//! connected component with more than one member is a cycle, and so is
//! every module that imports itself.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use ripple_core::types::FxHashMap;

use super::types::{CycleChain, DependencyMap};

/// Detect cycles in a dependency map. Members of each chain are sorted,
/// and chains are returned in sorted order.
pub fn detect_cycles(dep_map: &DependencyMap) -> Vec<CycleChain> {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut index: FxHashMap<&str, NodeIndex> = FxHashMap::default();

    for (module, targets) in dep_map {
        let src = intern(&mut graph, &mut index, module);
        for target in targets {
            let dst = intern(&mut graph, &mut index, target);
            graph.add_edge(src, dst, ());
        }
    }

    let mut cycles: Vec<CycleChain> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut chain: CycleChain = scc.iter().map(|&n| graph[n].to_string()).collect();
            chain.sort();
            chain
        })
        .collect();
    cycles.sort();

    tracing::debug!(cycles = cycles.len(), "fallback cycle detection finished");
    cycles
}

fn intern<'a>(
    graph: &mut DiGraph<&'a str, ()>,
    index: &mut FxHashMap<&'a str, NodeIndex>,
    id: &'a str,
) -> NodeIndex {
    *index.entry(id).or_insert_with(|| graph.add_node(id))
}
