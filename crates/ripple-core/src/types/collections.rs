//! Re-exports of the collection types used across Ripple.
//!
//! Ordered maps back everything that ends up in a report so output is
//! deterministic; Fx maps are for scratch state.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use std::collections::{BTreeMap, BTreeSet};
