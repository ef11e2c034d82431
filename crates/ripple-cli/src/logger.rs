//! Logging setup for the Ripple CLI.
//!
//! Level selection, highest priority first:
//! 1. `--verbose`: debug for all ripple crates
//! 2. `--quiet`: errors only
//! 3. `RIPPLE_LOG`: custom filter
//! 4. Default: info for all ripple crates

use ripple_core::tracing::init_tracing_with_options;

/// Initialize the tracing subscriber from the global CLI flags.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let directives = if verbose {
        Some("ripple=debug")
    } else if quiet {
        Some("ripple=error")
    } else {
        None
    };
    init_tracing_with_options(directives, use_color(no_color));
}

/// Colors are on unless `--no-color` is given or `NO_COLOR` is set.
pub fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none()
}
