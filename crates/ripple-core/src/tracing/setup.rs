//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable read for log directives.
pub const LOG_ENV_VAR: &str = "RIPPLE_LOG";

/// Filter used when `RIPPLE_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "ripple=info";

/// Initialize the Ripple tracing/logging system.
///
/// Reads `RIPPLE_LOG` for per-crate log levels.
/// Format: `RIPPLE_LOG=ripple_analysis=debug,ripple_core=warn`
///
/// Falls back to `ripple=info` if `RIPPLE_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    init_tracing_with_override(None);
}

/// Initialize tracing with explicit directives that take precedence over
/// `RIPPLE_LOG`. `None` behaves like [`init_tracing`].
///
/// Logs go to stderr so stdout stays free for report output.
pub fn init_tracing_with_override(directives: Option<&str>) {
    init_tracing_with_options(directives, true);
}

/// Like [`init_tracing_with_override`], with ANSI colors switchable.
pub fn init_tracing_with_options(directives: Option<&str>, ansi: bool) {
    INIT.call_once(|| {
        let filter = match directives {
            Some(d) => EnvFilter::new(d),
            None => EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES)),
        };

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_level(true)
                    .compact(),
            )
            .with(filter)
            .try_init();
    });
}
