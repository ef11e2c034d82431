//! Core types, errors, configuration, and tracing for the Ripple coupling analyzer.
//!
//! Analysis crates depend on this crate for shared vocabulary; it holds no
//! graph algorithms itself.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
