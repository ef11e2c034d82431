//! Shared constants for the Ripple coupling analyzer.

/// Ripple version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places kept for every real-valued metric in an emitted report.
pub const REPORT_DECIMALS: i32 = 3;

/// Default pattern identifying core/domain modules.
pub const DEFAULT_CORE_PATTERN: &str = "^src/(core|domain)/";

/// A core module whose instability is strictly above this value is a violation.
pub const DEFAULT_CORE_INSTABILITY_THRESHOLD: f64 = 0.8;

/// Value of `cyclesPct` when at least one cycle exists.
pub const CYCLES_PRESENT_PCT: f64 = 100.0;

/// Grade cut points shared by the layer and combined grading tables.
pub const GRADE_A_CUTOFF: f64 = 0.40;
pub const GRADE_B_CUTOFF: f64 = 0.60;
pub const GRADE_C_CUTOFF: f64 = 0.80;
pub const GRADE_D_CUTOFF: f64 = 0.95;

/// Coupling index divisors: `avgCe / 3 + avgRipple / 10 + cyclesPct / 100`.
pub const COUPLING_INDEX_CE_DIVISOR: f64 = 3.0;
pub const COUPLING_INDEX_RIPPLE_DIVISOR: f64 = 10.0;
pub const COUPLING_INDEX_CYCLES_DIVISOR: f64 = 100.0;

/// Default project root passed through to the module-graph extractor.
pub const DEFAULT_ROOT: &str = ".";

/// Default source subdirectory under the project root.
pub const DEFAULT_SRC: &str = "src";

/// Default tsconfig path relative to the project root.
pub const DEFAULT_TSCONFIG: &str = "tsconfig.json";

/// Default directory for emitted reports.
pub const DEFAULT_OUT_DIR: &str = "metrics";

/// Default file name for the combined report inside the output directory.
pub const DEFAULT_COMBINED_FILE: &str = "overall.coupling.json";

/// Guardrail: maximum tolerated `cyclesPct`.
pub const DEFAULT_MAX_CYCLES_PCT: f64 = 5.0;

/// Guardrail: maximum tolerated global instability.
pub const DEFAULT_MAX_GLOBAL_INSTABILITY: f64 = 0.65;

/// Project config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "ripple.toml";
