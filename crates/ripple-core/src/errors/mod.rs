//! Error handling for Ripple.
//! One error enum per subsystem, `thiserror` only.

pub mod combine_error;
pub mod config_error;
pub mod error_code;
pub mod gate_error;
pub mod input_error;
pub mod pipeline_error;
pub mod report_error;

pub use combine_error::CombineError;
pub use config_error::ConfigError;
pub use error_code::RippleErrorCode;
pub use gate_error::GateError;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
