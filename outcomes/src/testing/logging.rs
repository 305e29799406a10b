//! Tracing setup for tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a compact tracing subscriber writing to the test harness.
///
/// The filter comes from `RUST_LOG` and defaults to `outcomes=debug`. Calling
/// this more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("outcomes=debug"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .compact()
        .try_init();
}
