//! Tracing/logging setup shared by the PentaLedger binaries.

/// Initialize process-wide tracing with JSON output at `info`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init_json("info");
}

/// Like [`init`], with `directive` as the fallback filter when `RUST_LOG` is unset.
pub fn init_with_level(directive: &str) {
    tracing::init_json(directive);
}

/// Human-readable output on stderr for the CLI, `warn` unless `RUST_LOG` says otherwise.
pub fn init_cli() {
    tracing::init_compact("warn");
}

/// Tracing configuration (filters, layers).
pub mod tracing;
