//! One-shot configuration loading at process start.

use std::path::Path;
use std::sync::Arc;

use crate::config::{ConfigDefinition, ConfigError, ConfigProvider, ConfigurationSet, EnvSource};

/// Load the definition file at `path` against the process environment.
///
/// Call once before serving requests and hand the returned `Arc` to every
/// consumer. On error the caller should abort startup.
///
/// # Example
///
/// ```rust,no_run
/// use runtime_config::startup;
///
/// let config = match startup("app.config.toml") {
///     Ok(config) => config,
///     Err(e) => {
///         eprintln!("refusing to start: {e}");
///         std::process::exit(1);
///     }
/// };
/// println!("devtools enabled: {}", config.devtools_enabled());
/// ```
pub fn startup(path: impl AsRef<Path>) -> Result<Arc<ConfigurationSet>, ConfigError> {
    startup_with(path, &ConfigProvider::new())
}

/// Like [`startup`], with an explicitly configured provider.
pub fn startup_with<E: EnvSource>(
    path: impl AsRef<Path>,
    provider: &ConfigProvider<E>,
) -> Result<Arc<ConfigurationSet>, ConfigError> {
    let path = path.as_ref();
    let result = ConfigDefinition::from_path(path).and_then(|definition| provider.load(&definition));

    match result {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                compatibility_date = %config.compatibility_date(),
                devtools = config.devtools_enabled(),
                modules = ?config.enabled_modules(),
                public_keys = ?config.public_values().keys().collect::<Vec<_>>(),
                "configuration ready"
            );
            Ok(Arc::new(config))
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "configuration rejected");
            Err(e)
        }
    }
}
