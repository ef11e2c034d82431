//! Errors acquiring the raw dependency data from the module-graph extractor.

use std::path::PathBuf;

use super::error_code::{self, RippleErrorCode};

/// Fatal precondition failures: no computation starts when these occur.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Dependency map unavailable at {path}: {source}")]
    DependencyMapUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed dependency map in {origin}: {message}")]
    MalformedDependencyMap { origin: String, message: String },

    #[error("Malformed cycle list in {origin}: {message}")]
    MalformedCycles { origin: String, message: String },
}

impl RippleErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DependencyMapUnavailable { .. } => error_code::INPUT_MISSING,
            _ => error_code::INPUT_MALFORMED,
        }
    }
}
