//! Reading previously written layer reports for combination or checking.
//!
//! Older reports spell the node count `modules` and the violation list
//! `coreI_violations`, and may lack `avgCe`/`avgRipple`; all are accepted.
//! Missing averages are recomputed from `perNode`.

use std::path::Path;

use ripple_core::errors::CombineError;

use crate::structural::coupling::LayerReport;

/// Load the `layer` report at `path`. A missing file means the counterpart
/// report is absent, which is fatal for combination.
pub fn load_layer_report(layer: &str, path: &Path) -> Result<LayerReport, CombineError> {
    let text = std::fs::read_to_string(path).map_err(|_| CombineError::MissingReport {
        layer: layer.to_string(),
        path: path.to_path_buf(),
    })?;
    let report = parse_layer_report(layer, path, &text)?;
    tracing::debug!(layer, path = %path.display(), nodes = report.nodes, "layer report loaded");
    Ok(report)
}

pub fn parse_layer_report(layer: &str, path: &Path, text: &str) -> Result<LayerReport, CombineError> {
    let malformed = |e: serde_json::Error| CombineError::MalformedReport {
        layer: layer.to_string(),
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let value: serde_json::Value = serde_json::from_str(text).map_err(malformed)?;
    let has_avg_ce = value.get("avgCe").is_some();
    let has_avg_ripple = value.get("avgRipple").is_some();
    let mut report: LayerReport = serde_json::from_value(value).map_err(malformed)?;

    if !report.per_node.is_empty() {
        let count = report.per_node.len() as f64;
        if !has_avg_ce {
            report.avg_ce = report.per_node.values().map(|m| m.ce as f64).sum::<f64>() / count;
        }
        if !has_avg_ripple {
            report.avg_ripple = report.per_node.values().map(|m| m.ripple as f64).sum::<f64>() / count;
        }
        if !(has_avg_ce && has_avg_ripple) {
            tracing::debug!(
                layer,
                avg_ce = report.avg_ce,
                avg_ripple = report.avg_ripple,
                "averages recomputed from perNode"
            );
        }
    }

    if report.layer.is_empty() {
        Ok(report.with_layer(layer))
    } else {
        Ok(report)
    }
}
