//! Tracing/logging initialization.
//!
//! The storefront core never raises; degraded states (corrupt cart slot,
//! unreachable catalog source) only show up here, so the demo binary turns
//! this on before touching any session state.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Defaults to
/// `info`; `RUST_LOG=selvedge_cart=debug` style overrides apply.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
