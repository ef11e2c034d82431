//! Project location settings.
//!
//! These are passed through to the external module-graph extractor and
//! recorded in report metadata; the coupling math never reads them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROOT, DEFAULT_SRC, DEFAULT_TSCONFIG};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Base path for resolving relative module identifiers. Default: ".".
    pub root: Option<PathBuf>,
    /// Source subdirectory under `root`. Default: "src".
    pub src: Option<String>,
    /// tsconfig path relative to `root`. Default: "tsconfig.json".
    pub tsconfig: Option<PathBuf>,
    /// Skip imports the extractor could not resolve. Default: false.
    pub skip_unresolved: Option<bool>,
}

impl ProjectConfig {
    pub fn effective_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    pub fn effective_src(&self) -> &str {
        self.src.as_deref().unwrap_or(DEFAULT_SRC)
    }

    pub fn effective_tsconfig(&self) -> PathBuf {
        self.tsconfig
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TSCONFIG))
    }

    pub fn effective_skip_unresolved(&self) -> bool {
        self.skip_unresolved.unwrap_or(false)
    }

    /// `root/src`, the directory the extractor walks.
    pub fn source_dir(&self) -> PathBuf {
        self.effective_root().join(self.effective_src())
    }
}
