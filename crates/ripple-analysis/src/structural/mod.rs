//! Structural analysis over module dependency graphs.

pub mod coupling;
