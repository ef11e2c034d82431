//! Cross-layer combination errors.

use std::path::PathBuf;

use super::error_code::{self, RippleErrorCode};

/// A combined report needs both layer reports; anything less is fatal.
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    #[error("Missing {layer} report: {path}")]
    MissingReport { layer: String, path: PathBuf },

    #[error("Malformed {layer} report in {path}: {message}")]
    MalformedReport {
        layer: String,
        path: PathBuf,
        message: String,
    },
}

impl RippleErrorCode for CombineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingReport { .. } => error_code::REPORT_MISSING,
            Self::MalformedReport { .. } => error_code::REPORT_MALFORMED,
        }
    }
}
