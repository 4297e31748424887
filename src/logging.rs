//! Diagnostic logging setup.
//!
//! All diagnostics go to stderr so that tables and JSON on stdout stay
//! pipeable. The filter is read from `CLIPFS_LOG` and defaults to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants;

/// Installs the global subscriber. Call once at the top of `main`.
///
/// Calling it again is harmless; the second registration is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
