// Shared test helpers
//
// Note: helpers appear "unused" because each test binary compiles
// separately. Suppress the false-positive warnings.
#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Initializes tracing output for a test binary. Safe to call from every
/// test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
