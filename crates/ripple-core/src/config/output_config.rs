//! Output location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COMBINED_FILE, DEFAULT_OUT_DIR};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for reports. Default: "metrics".
    pub out_dir: Option<PathBuf>,
    /// Explicit layer report path; overrides `out_dir`.
    pub out: Option<PathBuf>,
    /// Combined report path. Default: `<out_dir>/overall.coupling.json`.
    pub combined_out: Option<PathBuf>,
}

impl OutputConfig {
    pub fn effective_out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    /// Destination of a layer report: `out`, else [`Self::default_layer_report_path`].
    pub fn layer_report_path(&self, layer: &str) -> PathBuf {
        match &self.out {
            Some(path) => path.clone(),
            None => self.default_layer_report_path(layer),
        }
    }

    /// `<out_dir>/coupling.<layer>.json`, ignoring any explicit `out`.
    pub fn default_layer_report_path(&self, layer: &str) -> PathBuf {
        self.effective_out_dir()
            .join(format!("coupling.{layer}.json"))
    }

    pub fn combined_report_path(&self) -> PathBuf {
        self.combined_out
            .clone()
            .unwrap_or_else(|| self.effective_out_dir().join(DEFAULT_COMBINED_FILE))
    }
}
