//! Guardrails applied to a finished layer report.
//!
//! The coupling engine only computes numbers; whether a build should fail
//! is decided here. Comparisons use the values as emitted (rounded to
//! report precision), so re-checking a stored report gives the same answer
//! as the run that wrote it.

use std::fmt;

use ripple_core::config::GuardrailConfig;
use ripple_core::errors::GateError;
use ripple_core::types::round3;
use serde::{Deserialize, Serialize};

use crate::structural::coupling::LayerReport;

/// The three guardrails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuardrailKind {
    Cycles,
    Instability,
    CoreModules,
}

impl GuardrailKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cycles => "cycles",
            Self::Instability => "instability",
            Self::CoreModules => "core-modules",
        }
    }

    pub fn all() -> &'static [GuardrailKind] {
        &[Self::Cycles, Self::Instability, Self::CoreModules]
    }
}

impl fmt::Display for GuardrailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single breached guardrail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailViolation {
    pub kind: GuardrailKind,
    pub actual: f64,
    pub limit: f64,
    pub message: String,
}

/// Result of evaluating every guardrail against one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailOutcome {
    pub layer: String,
    pub passed: bool,
    pub violations: Vec<GuardrailViolation>,
}

impl GuardrailOutcome {
    pub fn pass(layer: impl Into<String>) -> Self {
        Self {
            layer: layer.into(),
            passed: true,
            violations: Vec::new(),
        }
    }

    pub fn fail(layer: impl Into<String>, violations: Vec<GuardrailViolation>) -> Self {
        Self {
            layer: layer.into(),
            passed: false,
            violations,
        }
    }

    /// `Err(GateError::GuardrailViolated)` when any guardrail was breached.
    pub fn into_result(self) -> Result<(), GateError> {
        if self.passed {
            return Ok(());
        }
        Err(GateError::GuardrailViolated {
            count: self.violations.len(),
            messages: self.violations.into_iter().map(|v| v.message).collect(),
        })
    }
}

/// Evaluate the guardrails in `config` against `report`.
pub fn evaluate_guardrails(report: &LayerReport, config: &GuardrailConfig) -> GuardrailOutcome {
    let layer = if report.layer.is_empty() {
        "layer"
    } else {
        report.layer.as_str()
    };
    let mut violations = Vec::new();

    let cycles_pct = round3(report.cycles_pct);
    let max_cycles_pct = config.effective_max_cycles_pct();
    if cycles_pct > max_cycles_pct {
        violations.push(GuardrailViolation {
            kind: GuardrailKind::Cycles,
            actual: cycles_pct,
            limit: max_cycles_pct,
            message: format!("{layer} cyclesPct {cycles_pct}% > {max_cycles_pct}%"),
        });
    }

    let instability = round3(report.global_instability);
    let max_instability = config.effective_max_global_instability();
    if instability > max_instability {
        violations.push(GuardrailViolation {
            kind: GuardrailKind::Instability,
            actual: instability,
            limit: max_instability,
            message: format!("{layer} globalInstability {instability} > {max_instability}"),
        });
    }

    let core_count = report.core_violations.len();
    if config.effective_fail_on_core_violations() && core_count > 0 {
        violations.push(GuardrailViolation {
            kind: GuardrailKind::CoreModules,
            actual: core_count as f64,
            limit: 0.0,
            message: format!("{layer} core modules too unstable: {core_count}"),
        });
    }

    if violations.is_empty() {
        tracing::debug!(layer, "guardrails passed");
        GuardrailOutcome::pass(layer)
    } else {
        tracing::warn!(layer, violations = violations.len(), "guardrails breached");
        GuardrailOutcome::fail(layer, violations)
    }
}
