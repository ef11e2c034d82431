//! Ripple CLI library: argument definitions, logging setup, and commands.

pub mod cli;
pub mod commands;
pub mod logger;
