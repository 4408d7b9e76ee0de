//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set and valid; otherwise `default_level` applies.
/// Stdout is reserved for response frames, so nothing is ever logged there.
/// Calling this more than once is harmless.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).try_init();
}
