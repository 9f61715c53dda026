//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Output goes to stderr so stdout stays free for the host application.
///
/// Returns `false` if a global subscriber was already installed.
///
/// # Example
///
/// ```rust
/// use runtime_config::init_tracing;
///
/// // Debug events from configuration loading, info for everything else
/// init_tracing("runtime_config=debug,info");
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `runtime_config=debug` - Show which keys were loaded and overridden
/// - `runtime_config::config=trace` - Trace level for the config module
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_ok()
}
