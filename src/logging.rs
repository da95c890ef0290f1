// ============================================================================
// Logging
// Optional tracing subscriber setup for binaries and demos
// ============================================================================

//! The library only emits `tracing` events; it never installs a subscriber
//! on its own. Applications that do not have one can call [`init`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at INFO, overridable with `RUST_LOG`.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level
/// (`trace`, `debug`, `info`, `warn`, `error`).
///
/// `RUST_LOG` still takes precedence. Calling this twice is a no-op.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
