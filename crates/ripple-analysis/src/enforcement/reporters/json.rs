//! JSON reporter, the persisted report format.

use ripple_core::errors::ReportError;

use super::{ReportDocument, Reporter};

/// Pretty-printed JSON; reals already rounded by the report types.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, document: ReportDocument<'_>) -> Result<String, ReportError> {
        let rendered = match document {
            ReportDocument::Layer(report) => serde_json::to_string_pretty(report)?,
            ReportDocument::Combined(report) => serde_json::to_string_pretty(report)?,
        };
        Ok(rendered)
    }
}
