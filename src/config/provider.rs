//! Resolves a [`ConfigDefinition`] into a [`ConfigurationSet`].

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::definition::{ConfigDefinition, EnvReference, ValueSource};
use super::env::{env_name, EnvSource, ProcessEnv};
use super::error::ConfigError;
use super::set::{AppPaths, ConfigurationSet, PrivateConfig, PublicConfig};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loads configuration definitions against an environment.
///
/// Literal runtime values can be overridden by environment variables named
/// after their key. `KEY` is the upper snake form (see [`env_name`]) and
/// `key` the name exactly as declared:
///
/// | Surface | Variables checked, in order |
/// |---------|-----------------------------|
/// | private | `{prefix}{KEY}`, `{prefix}{key}` |
/// | public | `{prefix}PUBLIC_{KEY}`, `{prefix}{KEY}`, `{prefix}{key}` |
///
/// The prefix is empty by default. Explicit `{ env = "..." }` references read
/// exactly the named variable.
///
/// # Example
///
/// ```rust
/// use runtime_config::{ConfigDefinition, ConfigProvider, MapEnv};
///
/// let definition = ConfigDefinition::new("2025-07-15")
///     .private("EDITING_CODE", "")
///     .public("EDITING_CODE", "");
///
/// let env = MapEnv::new().with("EDITING_CODE", "abc123");
/// let config = ConfigProvider::with_env(env).load(&definition).unwrap();
///
/// assert_eq!(config.secrets().get("EDITING_CODE"), Some("abc123"));
/// assert_eq!(config.public_values().get("EDITING_CODE"), Some("abc123"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigProvider<E = ProcessEnv> {
    env: E,
    prefix: String,
    overrides: bool,
}

impl ConfigProvider<ProcessEnv> {
    /// Create a provider reading the process environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for ConfigProvider<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> ConfigProvider<E> {
    /// Create a provider reading the given environment.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            prefix: String::new(),
            overrides: true,
        }
    }

    /// Prefix for conventional override variables, e.g. `NUXT_`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Disable conventional overrides of literal values.
    ///
    /// Explicit environment references are still resolved.
    pub fn without_overrides(mut self) -> Self {
        self.overrides = false;
        self
    }

    /// Resolve and validate `definition`.
    ///
    /// Reads the environment but has no other side effects. Loading the same
    /// definition against the same environment always yields an equal result.
    pub fn load(&self, definition: &ConfigDefinition) -> Result<ConfigurationSet, ConfigError> {
        let compatibility_date = parse_date(definition.compatibility_date.as_deref())?;
        let enabled_modules = validate_modules(&definition.modules)?;

        let secrets = self.resolve_surface(&definition.runtime_config.private, Surface::Private)?;
        let public_values = self.resolve_surface(&definition.runtime_config.public, Surface::Public)?;

        let config = ConfigurationSet {
            compatibility_date,
            devtools_enabled: definition.devtools.enabled,
            enabled_modules,
            secrets: PrivateConfig::from_map(secrets),
            public_values: PublicConfig::from_map(public_values),
            app: AppPaths {
                base_url: definition.app.base_url.clone(),
                build_assets_dir: definition.app.build_assets_dir.clone(),
            },
        };

        tracing::debug!(
            compatibility_date = %config.compatibility_date,
            devtools = config.devtools_enabled,
            modules = config.enabled_modules.len(),
            private_keys = config.secrets.len(),
            public_keys = config.public_values.len(),
            "configuration loaded"
        );

        Ok(config)
    }

    fn resolve_surface(
        &self,
        entries: &BTreeMap<String, ValueSource>,
        surface: Surface,
    ) -> Result<BTreeMap<String, String>, ConfigError> {
        entries
            .iter()
            .map(|(key, source)| Ok((key.clone(), self.resolve(key, source, surface)?)))
            .collect()
    }

    fn resolve(&self, key: &str, source: &ValueSource, surface: Surface) -> Result<String, ConfigError> {
        match source {
            ValueSource::Literal(literal) => {
                if !self.overrides {
                    return Ok(literal.clone());
                }
                match self.override_for(key, surface) {
                    Some((var, value)) => {
                        tracing::debug!(key, var = %var, surface = surface.name(), "literal overridden from environment");
                        Ok(value)
                    }
                    None => Ok(literal.clone()),
                }
            }
            ValueSource::Env(EnvReference {
                env,
                default,
                required,
            }) => match self.env.var(env) {
                Some(value) => Ok(value),
                None if *required => Err(ConfigError::MissingEnv {
                    key: key.to_string(),
                    var: env.clone(),
                }),
                None => Ok(default.clone().unwrap_or_default()),
            },
        }
    }

    fn override_for(&self, key: &str, surface: Surface) -> Option<(String, String)> {
        let name = env_name(key);
        let mut candidates = match surface {
            Surface::Private => vec![format!("{}{}", self.prefix, name)],
            Surface::Public => vec![
                format!("{}PUBLIC_{}", self.prefix, name),
                format!("{}{}", self.prefix, name),
            ],
        };
        if name != key {
            candidates.push(format!("{}{}", self.prefix, key));
        }
        candidates
            .into_iter()
            .find_map(|var| self.env.var(&var).map(|value| (var, value)))
    }
}

#[derive(Clone, Copy, Debug)]
enum Surface {
    Private,
    Public,
}

impl Surface {
    fn name(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

fn parse_date(value: Option<&str>) -> Result<NaiveDate, ConfigError> {
    let value = value.ok_or(ConfigError::MissingField("compatibilityDate"))?;
    let trimmed = value.trim();
    let invalid = |reason: String| ConfigError::InvalidDate {
        value: value.to_string(),
        reason,
    };

    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| invalid(e.to_string()))?;
    // chrono accepts unpadded fields and a leading sign
    if date.format(DATE_FORMAT).to_string() != trimmed {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }
    Ok(date)
}

fn validate_modules(modules: &[String]) -> Result<Vec<String>, ConfigError> {
    for (index, module) in modules.iter().enumerate() {
        if module.is_empty() || module.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidModule {
                index,
                value: module.clone(),
            });
        }
    }
    Ok(modules.to_vec())
}
