//! Enforcement: guardrail evaluation and report rendering.

pub mod guardrails;
pub mod reporters;
