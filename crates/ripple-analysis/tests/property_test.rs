//! Property tests for coupling metric invariants.

use std::collections::{BTreeSet, VecDeque};

use proptest::prelude::*;
use regex::Regex;
use ripple_analysis::structural::coupling::*;

fn dep_map_strategy() -> impl Strategy<Value = DependencyMap> {
    prop::collection::btree_map(
        "[a-f]",
        prop::collection::btree_set("[a-h]", 0..4),
        0..7,
    )
}

/// Independent breadth-first reachability, excluding the start node.
fn reachable(map: &DependencyMap, start: &str) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        if let Some(targets) = map.get(u) {
            for v in targets {
                if seen.insert(v.clone()) {
                    queue.push_back(v);
                }
            }
        }
    }
    seen.remove(start);
    seen
}

fn rule() -> CoreModuleRule {
    CoreModuleRule::new(Regex::new("^[ab]").unwrap())
}

proptest! {
    #[test]
    fn instability_is_bounded(map in dep_map_strategy()) {
        let graph = build_graph(&map);
        for (_, m) in compute_node_metrics(&graph) {
            prop_assert!((0.0..=1.0).contains(&m.instability));
            if m.ca == 0 && m.ce == 0 {
                prop_assert_eq!(m.instability, 0.0);
            }
        }
    }

    #[test]
    fn ripple_matches_reachability_without_self(map in dep_map_strategy()) {
        let graph = build_graph(&map);
        for node in &graph.nodes {
            let expected = reachable(&map, node);
            prop_assert!(!expected.contains(node));
            prop_assert_eq!(ripple(&graph, node), expected.len());
        }
    }

    #[test]
    fn global_instability_is_mean(map in dep_map_strategy()) {
        let report = analyze_layer(&map, &rule(), &[]);
        let values: Vec<f64> = report.per_node.values().map(|m| m.instability).collect();
        let expected = if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };
        prop_assert!((report.global_instability - expected).abs() < 1e-9);
    }

    #[test]
    fn edges_equal_sum_of_efferent(map in dep_map_strategy()) {
        let report = analyze_layer(&map, &rule(), &[]);
        let expected: usize = map.values().map(|t| t.len()).sum();
        prop_assert_eq!(report.edges, expected);
    }

    #[test]
    fn grading_is_monotonic(a in 0.0f64..1.2, b in 0.0f64..1.2) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(grade_layer(lo) <= grade_layer(hi));
        prop_assert!(grade_combined(lo) <= grade_combined(hi));
    }

    #[test]
    fn coupling_index_is_clamped(
        avg_ce in 0.0f64..1_000.0,
        avg_ripple in 0.0f64..1_000.0,
        cyclic in any::<bool>(),
    ) {
        let pct = if cyclic { 100.0 } else { 0.0 };
        let index = coupling_index(avg_ce, avg_ripple, pct);
        prop_assert!((0.0..=1.0).contains(&index));
        if cyclic {
            prop_assert_eq!(index, 1.0);
        }
    }

    #[test]
    fn detected_cycles_only_contain_keys(map in dep_map_strategy()) {
        for chain in detect_cycles(&map) {
            prop_assert!(!chain.is_empty());
            for member in &chain {
                prop_assert!(map.contains_key(member));
            }
        }
    }
}
