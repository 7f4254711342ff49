//! Logging setup for provider binaries embedding this engine.
//!
//! The engine itself only emits `tracing` events (registry construction at
//! `debug`, re-casing at `trace`). These helpers install a subscriber for
//! binaries that want to see them. Output goes to **stderr**: in a provider
//! process, stdout carries the plugin handshake and must stay clean.
//!
//! Filtering follows the `RUST_LOG` environment variable, e.g.
//! `RUST_LOG=arm_resource_ids=trace ./my-provider`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the default logging subscriber.
///
/// Writes to stderr, respects `RUST_LOG`, and defaults to `info` when it is
/// unset.
///
/// # Panics
///
/// Panics if a global subscriber has already been set; use
/// [`try_init_logging`] where that is possible.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(false)
                .with_line_number(false),
        )
        .init();
}

/// Like [`init_logging`], but returns `false` instead of panicking when a
/// subscriber is already installed. Useful in tests, where several entry
/// points may race to initialize.
pub fn try_init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(false)
                .with_line_number(false),
        )
        .try_init()
        .is_ok()
}
