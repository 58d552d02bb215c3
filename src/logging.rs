//! Logging setup.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! `MINDFUL_LOG` takes an `EnvFilter` directive (e.g. `mindful=debug`);
//! otherwise `--verbose` selects debug and the default is warnings only.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "MINDFUL_LOG";

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "warn,mindful=debug" } else { "warn" })
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "logging initialized");
    }
}
