//! Guardrail errors.

use super::error_code::{self, RippleErrorCode};

/// Raised when a report breaches one or more guardrail thresholds.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("{count} guardrail violation(s): {}", .messages.join("; "))]
    GuardrailViolated { count: usize, messages: Vec<String> },
}

impl RippleErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        error_code::GUARDRAIL_FAILED
    }
}
