//! Coupling analysis end to end: graph → metrics → layer report → combined.

use chrono::Utc;
use regex::Regex;
use ripple_analysis::structural::coupling::*;
use ripple_core::types::{BTreeMap, HealthGrade};

fn dep_map(entries: &[(&str, &[&str])]) -> DependencyMap {
    entries
        .iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}

fn rule(pattern: &str) -> CoreModuleRule {
    CoreModuleRule::new(Regex::new(pattern).unwrap())
}

fn layer(name: &str, nodes: usize, avg_ce: f64, avg_ripple: f64, cycles_count: usize) -> LayerReport {
    LayerReport {
        layer: name.to_string(),
        root: None,
        nodes,
        edges: (avg_ce * nodes as f64) as usize,
        cycles_count,
        cycles_pct: if cycles_count > 0 { 100.0 } else { 0.0 },
        global_instability: 0.3,
        avg_ce,
        avg_ripple,
        health_grade: HealthGrade::A,
        core_violations: Vec::new(),
        per_node: BTreeMap::new(),
        generated_at: Utc::now(),
    }
}

#[test]
fn test_mutual_import_is_balanced_and_cyclic() {
    let map = dep_map(&[("A", &["B"]), ("B", &["A"])]);
    let cycles = detect_cycles(&map);
    let report = analyze_layer(&map, &rule("^core/"), &cycles);

    for node in ["A", "B"] {
        let m = report.per_node[node];
        assert_eq!(m.ca, 1);
        assert_eq!(m.ce, 1);
        assert_eq!(m.instability, 0.5);
        assert_eq!(m.ripple, 1, "ripple of {node} counts only the other module");
    }
    assert_eq!(report.cycles_count, 1);
    assert_eq!(report.cycles_pct, 100.0);
    assert_eq!(report.edges, 2);
}

#[test]
fn test_edgeless_graph_is_grade_a() {
    let map = dep_map(&[("A", &[]), ("B", &[]), ("C", &[])]);
    let report = analyze_layer(&map, &rule("^core/"), &[]);

    assert_eq!(report.nodes, 3);
    assert!(report.per_node.values().all(|m| m.instability == 0.0 && m.ripple == 0));
    assert_eq!(report.global_instability, 0.0);
    assert_eq!(report.health_grade, HealthGrade::A);
    assert!(report.core_violations.is_empty());
}

#[test]
fn test_unstable_core_module_flagged() {
    let map = dep_map(&[("core/x", &["util/y"]), ("util/y", &[])]);
    let report = analyze_layer(&map, &rule("^core/"), &[]);

    assert_eq!(report.per_node["core/x"].instability, 1.0);
    assert_eq!(
        report.core_violations,
        vec![CoreViolation {
            module: "core/x".to_string(),
            instability: 1.0,
        }]
    );
}

#[test]
fn test_combine_weights_by_node_count() {
    let combined = combine(layer("frontend", 10, 2.0, 1.0, 0), layer("backend", 10, 4.0, 3.0, 0));

    assert_eq!(combined.summary.avg_ce, 3.0);
    assert_eq!(combined.summary.avg_ripple, 2.0);
    assert_eq!(combined.summary.cycles_pct, 0.0);
    assert_eq!(combined.summary.coupling_index, 1.0);
    assert_eq!(combined.summary.health_grade, HealthGrade::F);
    assert_eq!(combined.summary.nodes, 20);
}

#[test]
fn test_combine_cycle_in_either_layer() {
    let combined = combine(layer("frontend", 5, 0.1, 0.1, 0), layer("backend", 5, 0.1, 0.1, 2));
    assert_eq!(combined.summary.cycles_pct, 100.0);
    assert_eq!(combined.summary.cycles_count, 2);
    assert_eq!(combined.summary.coupling_index, 1.0);
}

#[test]
fn test_combine_two_empty_layers() {
    let combined = combine(layer("frontend", 0, 0.0, 0.0, 0), layer("backend", 0, 0.0, 0.0, 0));
    assert_eq!(combined.summary.avg_ce, 0.0);
    assert_eq!(combined.summary.coupling_index, 0.0);
    assert_eq!(combined.summary.health_grade, HealthGrade::A);
}

#[test]
fn test_combined_embeds_inputs_unchanged() {
    let fe = layer("frontend", 4, 1.0, 2.0, 0);
    let be = layer("backend", 6, 0.5, 0.5, 0);
    let combined = combine(fe.clone(), be.clone());
    assert_eq!(combined.frontend, fe);
    assert_eq!(combined.backend, be);
}

#[test]
fn test_layer_report_json_shape() {
    let map = dep_map(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[]), ("d", &["c"])]);
    let report = analyze_layer(&map, &rule("^core/"), &[])
        .with_layer("frontend")
        .with_root("src");
    let json = serde_json::to_value(&report).unwrap();

    for key in [
        "layer",
        "root",
        "nodes",
        "edges",
        "cyclesCount",
        "cyclesPct",
        "globalInstability",
        "avgCe",
        "avgRipple",
        "healthGrade",
        "coreViolations",
        "perNode",
        "generatedAt",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["layer"], "frontend");
    assert_eq!(json["edges"], 4);
    // b: Ca=1, Ce=1 → 0.5; c: Ca=3, Ce=0 → 0; a: 1; d: 1 → mean 0.625
    assert_eq!(json["globalInstability"], 0.625);
    assert_eq!(json["healthGrade"], "C");
    assert_eq!(json["perNode"]["a"]["Ce"], 2);
    assert_eq!(json["perNode"]["a"]["ripple"], 2);
}

#[test]
fn test_instability_rounded_only_on_emission() {
    // x: Ca=2, Ce=1 → 1/3
    let map = dep_map(&[("x", &["y"]), ("p", &["x"]), ("q", &["x"]), ("y", &[])]);
    let report = analyze_layer(&map, &rule("^core/"), &[]);
    let x = report.per_node["x"];
    assert!((x.instability - 1.0 / 3.0).abs() < 1e-12);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["perNode"]["x"]["I"], 0.333);
}

#[test]
fn test_self_import_inflates_coupling() {
    let map = dep_map(&[("self", &["self"])]);
    let report = analyze_layer(&map, &rule("^core/"), &[]);
    let m = report.per_node["self"];
    assert_eq!((m.ca, m.ce), (1, 1));
    assert_eq!(m.instability, 0.5);
    assert_eq!(m.ripple, 0);
}

#[test]
fn test_combined_json_shape() {
    let combined = combine(layer("frontend", 3, 1.0, 1.0, 0), layer("backend", 1, 1.0, 1.0, 0));
    let json = serde_json::to_value(&combined).unwrap();
    for key in [
        "nodes",
        "edges",
        "cyclesCount",
        "avgCe",
        "avgRipple",
        "globalInstability",
        "cyclesPct",
        "couplingIndex",
        "healthGrade",
    ] {
        assert!(json["summary"].get(key).is_some(), "missing summary key {key}");
    }
    assert!(json.get("frontend").is_some());
    assert!(json.get("backend").is_some());
    assert!(json.get("generatedAt").is_some());
    // 1/3 + 1/10 = 0.4333...
    assert_eq!(json["summary"]["couplingIndex"], 0.433);
    assert_eq!(json["summary"]["healthGrade"], "B");
}
