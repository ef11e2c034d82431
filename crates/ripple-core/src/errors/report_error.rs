//! Report emission errors.

use std::path::PathBuf;

use super::error_code::{self, RippleErrorCode};

/// Errors writing or rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error writing report {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RippleErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_WRITE_ERROR
    }
}
