// src/log.rs
// Thin macro layer over `tracing`. Call sites stay short; the subscriber
// decides where lines go (stderr, RUST_LOG filtering).

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once; only the
/// first call wins. `RUST_LOG` overrides the default level.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        // try_init: a test harness or embedding app may already own the global
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
