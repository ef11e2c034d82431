//! Top-level pipeline error.

use super::error_code::RippleErrorCode;
use super::{CombineError, ConfigError, GateError, InputError, ReportError};

/// Errors that can occur anywhere between reading input and writing a report.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Combine error: {0}")]
    Combine(#[from] CombineError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Guardrail error: {0}")]
    Gate(#[from] GateError),
}

impl PipelineError {
    /// Guardrail breaches are an expected outcome; everything else is a
    /// precondition or environment failure.
    pub fn is_guardrail_failure(&self) -> bool {
        matches!(self, Self::Gate(_))
    }
}

impl RippleErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Combine(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Gate(e) => e.error_code(),
        }
    }
}
