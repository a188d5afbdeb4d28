//! Tracing initialization for viewplan binaries, tests and benches.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a compact stderr subscriber filtered by `VIEWPLAN_LOG`.
///
/// Example: `VIEWPLAN_LOG=viewplan_pairwise::setup=debug`. Only the first
/// call installs anything, and a subscriber installed elsewhere in the
/// process is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(log_filter())
            .try_init();
    });
}

/// The filter from `VIEWPLAN_LOG`, or `viewplan=info` when it is unset or
/// does not parse.
pub fn log_filter() -> EnvFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
