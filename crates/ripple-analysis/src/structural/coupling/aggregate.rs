//! Global aggregation: per-node metrics → graded layer report.

use chrono::Utc;
use regex::Regex;
use ripple_core::config::AnalysisConfig;
use ripple_core::constants::{CYCLES_PRESENT_PCT, DEFAULT_CORE_INSTABILITY_THRESHOLD};
use ripple_core::errors::ConfigError;
use ripple_core::types::BTreeMap;

use super::graph::build_graph;
use super::grading::grade_layer;
use super::metrics::compute_node_metrics;
use super::types::{CoreViolation, CycleChain, DependencyMap, LayerReport, NodeMetrics};

/// Core modules must stay stable: a module matching `pattern` with
/// instability strictly above `threshold` is a violation.
#[derive(Debug, Clone)]
pub struct CoreModuleRule {
    pattern: Regex,
    threshold: f64,
}

impl CoreModuleRule {
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            threshold: DEFAULT_CORE_INSTABILITY_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.compiled_core_pattern()?)
            .with_threshold(config.effective_core_instability_threshold()))
    }

    /// Unanchored search, so `core/` also matches `src/core/x`
    /// unless the pattern anchors itself.
    pub fn is_core(&self, module: &str) -> bool {
        self.pattern.is_match(module)
    }

    pub fn is_violation(&self, module: &str, instability: f64) -> bool {
        instability > self.threshold && self.is_core(module)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Reduce per-node metrics and the extractor's cycle list to a layer report.
///
/// Empty input yields zero means and grade A. The report's `layer` is
/// empty; callers label it with [`LayerReport::with_layer`].
pub fn aggregate(
    per_node: BTreeMap<String, NodeMetrics>,
    rule: &CoreModuleRule,
    cycles: &[CycleChain],
) -> LayerReport {
    let nodes = per_node.len();
    let edges: usize = per_node.values().map(|m| m.ce).sum();

    let global_instability = mean(per_node.values().map(|m| m.instability), nodes);
    let avg_ce = mean(per_node.values().map(|m| m.ce as f64), nodes);
    let avg_ripple = mean(per_node.values().map(|m| m.ripple as f64), nodes);

    let core_violations: Vec<CoreViolation> = per_node
        .iter()
        .filter(|(module, m)| rule.is_violation(module, m.instability))
        .map(|(module, m)| CoreViolation {
            module: module.clone(),
            instability: m.instability,
        })
        .collect();

    let cycles_pct = if cycles.is_empty() {
        0.0
    } else {
        CYCLES_PRESENT_PCT
    };
    let health_grade = grade_layer(global_instability);

    tracing::info!(
        nodes,
        edges,
        cycles = cycles.len(),
        global_instability,
        grade = %health_grade,
        core_violations = core_violations.len(),
        "layer aggregated"
    );

    LayerReport {
        layer: String::new(),
        root: None,
        nodes,
        edges,
        cycles_count: cycles.len(),
        cycles_pct,
        global_instability,
        avg_ce,
        avg_ripple,
        health_grade,
        core_violations,
        per_node,
        generated_at: Utc::now(),
    }
}

/// Graph, metrics, and aggregation in one pass over a dependency map.
pub fn analyze_layer(
    dep_map: &DependencyMap,
    rule: &CoreModuleRule,
    cycles: &[CycleChain],
) -> LayerReport {
    let graph = build_graph(dep_map);
    let per_node = compute_node_metrics(&graph);
    aggregate(per_node, rule, cycles)
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::types::HealthGrade;

    fn rule(pattern: &str) -> CoreModuleRule {
        CoreModuleRule::new(Regex::new(pattern).unwrap())
    }

    fn metrics(ca: usize, ce: usize, ripple: usize) -> NodeMetrics {
        NodeMetrics {
            ca,
            ce,
            instability: super::super::metrics::instability(ca, ce),
            ripple,
        }
    }

    #[test]
    fn empty_input_is_grade_a() {
        let report = aggregate(BTreeMap::new(), &rule("^core/"), &[]);
        assert_eq!(report.nodes, 0);
        assert_eq!(report.global_instability, 0.0);
        assert_eq!(report.avg_ce, 0.0);
        assert_eq!(report.health_grade, HealthGrade::A);
        assert_eq!(report.cycles_pct, 0.0);
    }

    #[test]
    fn global_instability_is_mean_of_node_values() {
        let mut per_node = BTreeMap::new();
        per_node.insert("a".to_string(), metrics(0, 1, 1));
        per_node.insert("b".to_string(), metrics(1, 1, 1));
        per_node.insert("c".to_string(), metrics(1, 0, 0));
        let report = aggregate(per_node, &rule("^core/"), &[]);
        assert!((report.global_instability - 0.5).abs() < 1e-12);
        assert_eq!(report.edges, 2);
        assert!((report.avg_ce - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.health_grade, HealthGrade::B);
    }

    #[test]
    fn grade_uses_unrounded_mean() {
        let mut per_node = BTreeMap::new();
        for (name, instability) in [("a", 0.3992), ("b", 0.4)] {
            per_node.insert(
                name.to_string(),
                NodeMetrics { ca: 0, ce: 0, instability, ripple: 0 },
            );
        }
        let report = aggregate(per_node, &rule("^core/"), &[]);
        assert_eq!(report.health_grade, HealthGrade::A);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["globalInstability"], 0.4);
        assert_eq!(json["healthGrade"], "A");
    }

    #[test]
    fn any_cycle_sets_binary_pct() {
        let cycles = vec![vec!["a".to_string(), "b".to_string()]];
        let report = aggregate(BTreeMap::new(), &rule("^core/"), &cycles);
        assert_eq!(report.cycles_count, 1);
        assert_eq!(report.cycles_pct, 100.0);
    }

    #[test]
    fn core_violation_requires_match_and_strict_threshold() {
        let r = rule("^core/");
        assert!(r.is_violation("core/x", 0.81));
        assert!(!r.is_violation("core/x", 0.8));
        assert!(!r.is_violation("util/x", 1.0));
        assert!(r.clone().with_threshold(0.5).is_violation("core/x", 0.6));
    }

    #[test]
    fn rule_from_default_config() {
        let r = CoreModuleRule::from_config(&AnalysisConfig::default()).unwrap();
        assert_eq!(r.pattern(), "^src/(core|domain)/");
        assert_eq!(r.threshold(), 0.8);
        assert!(r.is_core("src/domain/cart.ts"));
    }
}
