//! Configuration system for Ripple.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod analysis_config;
pub mod guardrail_config;
pub mod output_config;
pub mod project_config;
pub mod ripple_config;

pub use analysis_config::AnalysisConfig;
pub use guardrail_config::GuardrailConfig;
pub use output_config::OutputConfig;
pub use project_config::ProjectConfig;
pub use ripple_config::{CliOverrides, RippleConfig};
