//! Tests for the Ripple tracing setup.

use std::sync::Mutex;

use ripple_core::tracing::{init_tracing, init_tracing_with_override};

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_ripple_log_directives_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("RIPPLE_LOG", "ripple_analysis=debug,ripple_core=warn");
    init_tracing();
    std::env::remove_var("RIPPLE_LOG");
    tracing::info!("tracing initialized");
}

#[test]
fn test_init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_with_override(Some("ripple=debug"));
    init_tracing();
}
