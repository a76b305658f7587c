use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `DAYREACH_LOG=dr_core=debug`.
pub const LOG_ENV: &str = "DAYREACH_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Installs the global tracing subscriber, writing to stderr.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
