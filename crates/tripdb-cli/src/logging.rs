//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// Reads the `TRIPDB_LOG` environment variable (e.g. `TRIPDB_LOG=tripdb_core=debug`).
/// Falls back to `info` for the tripdb crates, or `debug` with `verbose`.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "warn,tripdb=debug,tripdb_core=debug"
        } else {
            "warn,tripdb=info,tripdb_core=info"
        };
        let filter =
            EnvFilter::try_from_env("TRIPDB_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
