//! Dependency map and cycle list produced by the module-graph extractor.
//!
//! Accepted shapes:
//! - a plain map `{ "<module>": ["<dep>", ...] }`
//! - a document `{ "dependencies": { ... }, "cycles": [[...], ...] }`
//!
//! Cycles may also come from a separate file holding `[[...], ...]`.

use std::path::Path;

use ripple_core::errors::InputError;
use serde::Deserialize;
use serde_json::Value;

use crate::structural::coupling::{CycleChain, DependencyMap};

/// Parsed extractor output. `cycles` is `None` when the extractor did not
/// report any cycle list, which is different from reporting zero cycles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyInput {
    pub dependencies: DependencyMap,
    pub cycles: Option<Vec<CycleChain>>,
}

#[derive(Deserialize)]
struct DependencyDocument {
    dependencies: DependencyMap,
    #[serde(default)]
    cycles: Option<Vec<CycleChain>>,
}

/// Read and parse a dependency input file. A missing or unreadable file is
/// a fatal precondition failure.
pub fn load_dependency_input(path: &Path) -> Result<DependencyInput, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        InputError::DependencyMapUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let input = parse_dependency_input(&path.display().to_string(), &text)?;
    tracing::debug!(
        path = %path.display(),
        modules = input.dependencies.len(),
        cycles = input.cycles.as_ref().map(Vec::len),
        "dependency input loaded"
    );
    Ok(input)
}

/// Parse either accepted shape. `origin` labels error messages.
pub fn parse_dependency_input(origin: &str, text: &str) -> Result<DependencyInput, InputError> {
    let malformed = |e: serde_json::Error| InputError::MalformedDependencyMap {
        origin: origin.to_string(),
        message: e.to_string(),
    };

    let value: Value = serde_json::from_str(text).map_err(malformed)?;

    let is_document = value
        .get("dependencies")
        .is_some_and(Value::is_object);

    if is_document {
        let doc: DependencyDocument = serde_json::from_value(value).map_err(malformed)?;
        Ok(DependencyInput {
            dependencies: doc.dependencies,
            cycles: doc.cycles,
        })
    } else {
        let dependencies: DependencyMap = serde_json::from_value(value).map_err(malformed)?;
        Ok(DependencyInput {
            dependencies,
            cycles: None,
        })
    }
}

/// Read a standalone cycle list file.
pub fn load_cycles(path: &Path) -> Result<Vec<CycleChain>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        InputError::DependencyMapUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    parse_cycles(&path.display().to_string(), &text)
}

pub fn parse_cycles(origin: &str, text: &str) -> Result<Vec<CycleChain>, InputError> {
    serde_json::from_str(text).map_err(|e| InputError::MalformedCycles {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}
