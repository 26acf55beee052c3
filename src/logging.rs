//! Diagnostic logging.
//!
//! User-facing messages go through the `info!`/`success!`/`warning!`/`error!`
//! macros on stdout. This module sets up `tracing` for everything else
//! (requests, callback hits, handshake steps) on stderr, so it never mixes
//! with the listings.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "musicadvisor=warn";

/// Initialize the tracing subscriber.
///
/// The level is taken from `RUST_LOG` (e.g. `RUST_LOG=musicadvisor=debug`),
/// defaulting to warnings only. Calling it twice is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
}
