//! Coupling analysis types: dependency graph, per-node metrics, reports.

use chrono::{DateTime, Utc};
use ripple_core::types::{serialize_rounded, BTreeMap, BTreeSet, FxHashMap, FxHashSet, HealthGrade};
use serde::{Deserialize, Serialize};

/// Module → modules it directly imports, as supplied by the extractor.
pub type DependencyMap = BTreeMap<String, BTreeSet<String>>;

/// One circular import path, as a list of module identifiers.
pub type CycleChain = Vec<String>;

/// Bidirectional view of a dependency map.
///
/// `nodes` holds only the map's keys, sorted. Targets that never appear as
/// keys (external or unresolved imports) are present in `reverse` so their
/// afferent coupling is known, but they are not iterated as nodes.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub nodes: Vec<String>,
    pub forward: FxHashMap<String, FxHashSet<String>>,
    pub reverse: FxHashMap<String, FxHashSet<String>>,
}

impl DependencyGraph {
    /// Modules `node` depends on.
    pub fn dependencies(&self, node: &str) -> impl Iterator<Item = &str> {
        self.forward
            .get(node)
            .into_iter()
            .flat_map(|targets| targets.iter().map(String::as_str))
    }

    /// Modules that depend on `node`.
    pub fn dependents(&self, node: &str) -> impl Iterator<Item = &str> {
        self.reverse
            .get(node)
            .into_iter()
            .flat_map(|sources| sources.iter().map(String::as_str))
    }

    /// Efferent coupling: |forward[node]|.
    pub fn efferent(&self, node: &str) -> usize {
        self.forward.get(node).map_or(0, FxHashSet::len)
    }

    /// Afferent coupling: |reverse[node]|.
    pub fn afferent(&self, node: &str) -> usize {
        self.reverse.get(node).map_or(0, FxHashSet::len)
    }

    /// Total forward edges leaving the node set.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| self.efferent(n)).sum()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Coupling metrics for a single module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeMetrics {
    /// Afferent coupling: distinct modules depending on this one.
    #[serde(rename = "Ca")]
    pub ca: usize,
    /// Efferent coupling: distinct modules this one depends on.
    #[serde(rename = "Ce")]
    pub ce: usize,
    /// Instability: Ce / (Ca + Ce), 0 for an isolated module. Range [0, 1].
    #[serde(rename = "I", serialize_with = "serialize_rounded")]
    pub instability: f64,
    /// Modules transitively reachable through forward edges, excluding self.
    pub ripple: usize,
}

/// A core/domain module whose instability is above the allowed threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreViolation {
    pub module: String,
    #[serde(rename = "I", serialize_with = "serialize_rounded")]
    pub instability: f64,
}

/// Aggregate coupling report for one layer (e.g. frontend or backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerReport {
    #[serde(default)]
    pub layer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(alias = "modules")]
    pub nodes: usize,
    pub edges: usize,
    pub cycles_count: usize,
    /// 100 when any cycle exists, else 0.
    #[serde(serialize_with = "serialize_rounded")]
    pub cycles_pct: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub global_instability: f64,
    #[serde(default, serialize_with = "serialize_rounded")]
    pub avg_ce: f64,
    #[serde(default, serialize_with = "serialize_rounded")]
    pub avg_ripple: f64,
    pub health_grade: HealthGrade,
    #[serde(default, alias = "coreI_violations")]
    pub core_violations: Vec<CoreViolation>,
    #[serde(default)]
    pub per_node: BTreeMap<String, NodeMetrics>,
    pub generated_at: DateTime<Utc>,
}

impl LayerReport {
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn has_cycles(&self) -> bool {
        self.cycles_count > 0 || self.cycles_pct > 0.0
    }
}

/// Cross-layer summary metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedSummary {
    pub nodes: usize,
    pub edges: usize,
    pub cycles_count: usize,
    #[serde(serialize_with = "serialize_rounded")]
    pub avg_ce: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub avg_ripple: f64,
    #[serde(default, serialize_with = "serialize_rounded")]
    pub global_instability: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub cycles_pct: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub coupling_index: f64,
    pub health_grade: HealthGrade,
}

/// Two layer reports merged into one weighted summary.
///
/// Both inputs are embedded as parsed [`LayerReport`] values, so their
/// metrics are unchanged but legacy keys (`modules`, `coreI_violations`)
/// are written under their current names and unknown keys are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedReport {
    pub summary: CombinedSummary,
    pub frontend: LayerReport,
    pub backend: LayerReport,
    pub generated_at: DateTime<Utc>,
}
