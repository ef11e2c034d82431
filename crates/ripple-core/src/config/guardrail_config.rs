//! Guardrail thresholds applied to a finished layer report.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_CYCLES_PCT, DEFAULT_MAX_GLOBAL_INSTABILITY};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardrailConfig {
    /// Fail when `cyclesPct` exceeds this. Default: 5.0.
    pub max_cycles_pct: Option<f64>,
    /// Fail when global instability exceeds this. Default: 0.65.
    pub max_global_instability: Option<f64>,
    /// Fail when any core module is too unstable. Default: true.
    pub fail_on_core_violations: Option<bool>,
}

impl GuardrailConfig {
    pub fn effective_max_cycles_pct(&self) -> f64 {
        self.max_cycles_pct.unwrap_or(DEFAULT_MAX_CYCLES_PCT)
    }

    pub fn effective_max_global_instability(&self) -> f64 {
        self.max_global_instability
            .unwrap_or(DEFAULT_MAX_GLOBAL_INSTABILITY)
    }

    pub fn effective_fail_on_core_violations(&self) -> bool {
        self.fail_on_core_violations.unwrap_or(true)
    }
}
