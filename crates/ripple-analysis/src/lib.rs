//! Ripple analysis engine.
//!
//! `structural::coupling` turns a dependency map into per-node coupling
//! metrics, a graded layer report, and a combined cross-layer report.
//! `ingest` reads extractor output and stored reports; `enforcement`
//! evaluates guardrails and renders reports.

pub mod enforcement;
pub mod ingest;
pub mod structural;
