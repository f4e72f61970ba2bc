//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set and valid, else `fallback`, else `info`.
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// JSON logs with timestamps (server and desktop).
pub fn init_json(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Compact logs on stderr so stdout stays clean for command output.
pub fn init_compact(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
