//! Analysis configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CORE_INSTABILITY_THRESHOLD, DEFAULT_CORE_PATTERN};
use crate::errors::ConfigError;

/// Configuration for the coupling analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Regular expression matching core/domain module identifiers.
    /// Default: `^src/(core|domain)/`.
    pub core_pattern: Option<String>,
    /// Core modules with instability strictly above this are violations. Default: 0.8.
    pub core_instability_threshold: Option<f64>,
}

impl AnalysisConfig {
    pub fn effective_core_pattern(&self) -> &str {
        self.core_pattern.as_deref().unwrap_or(DEFAULT_CORE_PATTERN)
    }

    pub fn effective_core_instability_threshold(&self) -> f64 {
        self.core_instability_threshold
            .unwrap_or(DEFAULT_CORE_INSTABILITY_THRESHOLD)
    }

    /// Compile the core pattern.
    pub fn compiled_core_pattern(&self) -> Result<Regex, ConfigError> {
        Regex::new(self.effective_core_pattern()).map_err(|e| ConfigError::InvalidValue {
            field: "analysis.core_pattern".to_string(),
            message: e.to_string(),
        })
    }
}
