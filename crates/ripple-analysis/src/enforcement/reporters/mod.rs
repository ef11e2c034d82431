//! Reporters: output formats for layer and combined reports.

pub mod console;
pub mod json;

use std::path::Path;

use ripple_core::errors::ReportError;

use crate::structural::coupling::{CombinedReport, LayerReport};

/// Any report a reporter can render.
#[derive(Debug, Clone, Copy)]
pub enum ReportDocument<'a> {
    Layer(&'a LayerReport),
    Combined(&'a CombinedReport),
}

impl<'a> From<&'a LayerReport> for ReportDocument<'a> {
    fn from(report: &'a LayerReport) -> Self {
        Self::Layer(report)
    }
}

impl<'a> From<&'a CombinedReport> for ReportDocument<'a> {
    fn from(report: &'a CombinedReport) -> Self {
        Self::Combined(report)
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, document: ReportDocument<'_>) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["json", "console"]
}

/// Render `document` as JSON and write it to `path`, creating parent
/// directories as needed.
pub fn write_report<'a>(
    path: &Path,
    document: impl Into<ReportDocument<'a>>,
) -> Result<(), ReportError> {
    let rendered = json::JsonReporter.generate(document.into())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, rendered).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
