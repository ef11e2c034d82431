//! Input adapters: extractor output and stored layer reports.
//!
//! All file reading happens here; the coupling module never touches I/O.

pub mod dependency_input;
pub mod layer_report;

pub use dependency_input::{
    load_cycles, load_dependency_input, parse_cycles, parse_dependency_input, DependencyInput,
};
pub use layer_report::{load_layer_report, parse_layer_report};
