// src/log.rs
// Logging goes through `tracing`; the macros keep call sites short.
// Nothing is printed unless RUST_LOG asks for it (default: warn).

use tracing_subscriber::EnvFilter;

#[doc(hidden)]
pub use tracing;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
