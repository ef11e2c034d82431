//! Top-level Ripple configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, GuardrailConfig, OutputConfig, ProjectConfig};
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_ROOT};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RIPPLE_*`)
/// 3. Project config (`ripple.toml` in the project root, or an explicit file)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RippleConfig {
    pub project: ProjectConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub guardrails: GuardrailConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub src: Option<String>,
    pub tsconfig: Option<PathBuf>,
    pub skip_unresolved: Option<bool>,
    pub core_pattern: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub combined_out: Option<PathBuf>,
}

impl RippleConfig {
    /// Load configuration, reading `ripple.toml` from `root` when present.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::finish(config, cli_overrides)
    }

    /// Directory searched for `ripple.toml`: the CLI root, else `RIPPLE_ROOT`,
    /// else the working directory.
    pub fn discover_root(cli_overrides: Option<&CliOverrides>) -> PathBuf {
        cli_overrides
            .and_then(|cli| cli.root.clone())
            .or_else(|| std::env::var_os("RIPPLE_ROOT").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(
        path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::finish(config, cli_overrides)
    }

    fn finish(
        mut config: RippleConfig,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            core_pattern = config.analysis.effective_core_pattern(),
            source_dir = %config.project.source_dir().display(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RippleConfig) -> Result<(), ConfigError> {
        config.analysis.compiled_core_pattern()?;

        if let Some(threshold) = config.analysis.core_instability_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.core_instability_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(limit) = config.guardrails.max_global_instability {
            if !(0.0..=1.0).contains(&limit) {
                return Err(ConfigError::ValidationFailed {
                    field: "guardrails.max_global_instability".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(limit) = config.guardrails.max_cycles_pct {
            if !(0.0..=100.0).contains(&limit) {
                return Err(ConfigError::ValidationFailed {
                    field: "guardrails.max_cycles_pct".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        if let Some(src) = &config.project.src {
            if src.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "project.src".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RippleConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RippleConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut RippleConfig, other: &RippleConfig) {
        // Project
        if other.project.root.is_some() {
            base.project.root = other.project.root.clone();
        }
        if other.project.src.is_some() {
            base.project.src = other.project.src.clone();
        }
        if other.project.tsconfig.is_some() {
            base.project.tsconfig = other.project.tsconfig.clone();
        }
        if other.project.skip_unresolved.is_some() {
            base.project.skip_unresolved = other.project.skip_unresolved;
        }

        // Analysis
        if other.analysis.core_pattern.is_some() {
            base.analysis.core_pattern = other.analysis.core_pattern.clone();
        }
        if other.analysis.core_instability_threshold.is_some() {
            base.analysis.core_instability_threshold = other.analysis.core_instability_threshold;
        }

        // Output
        if other.output.out_dir.is_some() {
            base.output.out_dir = other.output.out_dir.clone();
        }
        if other.output.out.is_some() {
            base.output.out = other.output.out.clone();
        }
        if other.output.combined_out.is_some() {
            base.output.combined_out = other.output.combined_out.clone();
        }

        // Guardrails
        if other.guardrails.max_cycles_pct.is_some() {
            base.guardrails.max_cycles_pct = other.guardrails.max_cycles_pct;
        }
        if other.guardrails.max_global_instability.is_some() {
            base.guardrails.max_global_instability = other.guardrails.max_global_instability;
        }
        if other.guardrails.fail_on_core_violations.is_some() {
            base.guardrails.fail_on_core_violations = other.guardrails.fail_on_core_violations;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RIPPLE_CORE_PATTERN`, `RIPPLE_MAX_GLOBAL_INSTABILITY`, etc.
    fn apply_env_overrides(config: &mut RippleConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("RIPPLE_ROOT") {
            config.project.root = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("RIPPLE_SRC") {
            config.project.src = Some(val);
        }
        if let Ok(val) = std::env::var("RIPPLE_CORE_PATTERN") {
            config.analysis.core_pattern = Some(val);
        }
        if let Ok(val) = std::env::var("RIPPLE_OUT_DIR") {
            config.output.out_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("RIPPLE_MAX_CYCLES_PCT") {
            config.guardrails.max_cycles_pct = Some(parse_env("RIPPLE_MAX_CYCLES_PCT", &val)?);
        }
        if let Ok(val) = std::env::var("RIPPLE_MAX_GLOBAL_INSTABILITY") {
            config.guardrails.max_global_instability =
                Some(parse_env("RIPPLE_MAX_GLOBAL_INSTABILITY", &val)?);
        }
        if let Ok(val) = std::env::var("RIPPLE_FAIL_ON_CORE_VIOLATIONS") {
            config.guardrails.fail_on_core_violations =
                Some(parse_env("RIPPLE_FAIL_ON_CORE_VIOLATIONS", &val)?);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RippleConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.root {
            config.project.root = Some(v.clone());
        }
        if let Some(ref v) = cli.src {
            config.project.src = Some(v.clone());
        }
        if let Some(ref v) = cli.tsconfig {
            config.project.tsconfig = Some(v.clone());
        }
        if let Some(v) = cli.skip_unresolved {
            config.project.skip_unresolved = Some(v);
        }
        if let Some(ref v) = cli.core_pattern {
            config.analysis.core_pattern = Some(v.clone());
        }
        if let Some(ref v) = cli.out_dir {
            config.output.out_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.out {
            config.output.out = Some(v.clone());
        }
        if let Some(ref v) = cli.combined_out {
            config.output.combined_out = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: name.to_string(),
        message: format!("{raw:?}: {e}"),
    })
}
