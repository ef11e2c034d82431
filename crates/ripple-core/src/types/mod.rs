//! Shared data types: collections, health grades, and report rounding.

pub mod collections;
pub mod grade;
pub mod rounding;

pub use collections::{BTreeMap, BTreeSet, FxHashMap, FxHashSet};
pub use grade::HealthGrade;
pub use rounding::{round3, serialize_rounded};
