//! Coupling analysis: afferent/efferent coupling, instability, ripple size,
//! letter grading, and the cross-layer coupling index.
//!
//! Data flows one way: dependency map → graph → per-node metrics →
//! layer report → (optionally) combined report. Every stage is a pure
//! function returning an owned value.

pub mod aggregate;
pub mod combine;
pub mod cycle_detection;
pub mod grading;
pub mod graph;
pub mod metrics;
pub mod types;

pub use aggregate::{aggregate, analyze_layer, CoreModuleRule};
pub use combine::{combine, coupling_index, weighted_average};
pub use cycle_detection::detect_cycles;
pub use grading::{grade_combined, grade_layer};
pub use graph::build_graph;
pub use metrics::{compute_node_metrics, instability, node_metrics, ripple};
pub use types::*;
