//! RippleErrorCode trait for machine-readable error classification.

/// Every error enum implements this to expose a stable code string
/// that scripts wrapping the CLI can match on.
pub trait RippleErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_MISSING: &str = "INPUT_MISSING";
pub const INPUT_MALFORMED: &str = "INPUT_MALFORMED";
pub const REPORT_MISSING: &str = "REPORT_MISSING";
pub const REPORT_MALFORMED: &str = "REPORT_MALFORMED";
pub const REPORT_WRITE_ERROR: &str = "REPORT_WRITE_ERROR";
pub const GUARDRAIL_FAILED: &str = "GUARDRAIL_FAILED";
