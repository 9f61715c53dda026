//! Static configuration definition, the input to [`ConfigProvider`](super::ConfigProvider).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;

/// Static configuration definition.
///
/// Mirrors the declarative settings object a host application ships with.
/// Field names follow the camel case used in definition files:
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `compatibilityDate` | (required) | `YYYY-MM-DD` behaviour pin |
/// | `devtools.enabled` | `false` | Enable developer tooling |
/// | `modules` | `[]` | Ordered module identifiers |
/// | `runtimeConfig` | `{}` | Private runtime values |
/// | `runtimeConfig.public` | `{}` | Values safe to send to clients |
/// | `app.baseURL` | (unset) | Deployment path prefix |
/// | `app.buildAssetsDir` | (unset) | Built asset directory |
///
/// Unrecognized top-level keys are ignored.
///
/// # Example
///
/// ```rust
/// use runtime_config::ConfigDefinition;
///
/// let definition = ConfigDefinition::from_toml_str(r#"
///     compatibilityDate = "2025-07-15"
///     devtools = { enabled = true }
///     modules = ["tailwind"]
///
///     [runtimeConfig]
///     EDITING_CODE = ""
///
///     [runtimeConfig.public]
///     EDITING_CODE = ""
/// "#).unwrap();
///
/// assert!(definition.devtools.enabled);
/// assert_eq!(definition.modules, vec!["tailwind".to_string()]);
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDefinition {
    /// Required; validated as a calendar date on load.
    #[serde(default)]
    pub compatibility_date: Option<String>,
    #[serde(default)]
    pub devtools: DevtoolsDefinition,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub runtime_config: RuntimeConfigDefinition,
    #[serde(default)]
    pub app: AppDefinition,
}

/// `devtools` section.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DevtoolsDefinition {
    #[serde(default)]
    pub enabled: bool,
}

/// `runtimeConfig` section.
///
/// Every key other than `public` is a private value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfigDefinition {
    #[serde(default)]
    pub public: BTreeMap<String, ValueSource>,
    #[serde(flatten)]
    pub private: BTreeMap<String, ValueSource>,
}

/// `app` section. Deployment paths have no defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AppDefinition {
    #[serde(default, rename = "baseURL")]
    pub base_url: Option<String>,
    #[serde(default, rename = "buildAssetsDir")]
    pub build_assets_dir: Option<String>,
}

/// Where a runtime config value comes from.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ValueSource {
    /// A literal default, overridable through the conventional variable name.
    Literal(String),
    /// An explicit reference to an environment variable.
    Env(EnvReference),
}

/// `{ env = "NAME", default = "...", required = true }`.
///
/// Unknown keys are a parse error.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnvReference {
    pub env: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl ValueSource {
    /// Reference `var`, falling back to an empty string when unset.
    pub fn env(var: impl Into<String>) -> Self {
        Self::Env(EnvReference {
            env: var.into(),
            default: None,
            required: false,
        })
    }

    /// Reference `var`, failing the load when unset.
    pub fn required_env(var: impl Into<String>) -> Self {
        Self::Env(EnvReference {
            env: var.into(),
            default: None,
            required: true,
        })
    }

    /// Reference `var`, falling back to `default` when unset.
    pub fn env_or(var: impl Into<String>, default: impl Into<String>) -> Self {
        Self::Env(EnvReference {
            env: var.into(),
            default: Some(default.into()),
            required: false,
        })
    }
}

impl From<&str> for ValueSource {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for ValueSource {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl ConfigDefinition {
    /// Start a definition with the given compatibility date.
    pub fn new(compatibility_date: impl Into<String>) -> Self {
        Self {
            compatibility_date: Some(compatibility_date.into()),
            ..Self::default()
        }
    }

    /// Enable or disable developer tooling.
    pub fn devtools(mut self, enabled: bool) -> Self {
        self.devtools.enabled = enabled;
        self
    }

    /// Append a module identifier.
    pub fn module(mut self, id: impl Into<String>) -> Self {
        self.modules.push(id.into());
        self
    }

    /// Declare a private runtime value.
    pub fn private(mut self, key: impl Into<String>, value: impl Into<ValueSource>) -> Self {
        self.runtime_config.private.insert(key.into(), value.into());
        self
    }

    /// Declare a public runtime value.
    ///
    /// Public values are independent of private ones: declaring the same key
    /// in both places stores two copies.
    pub fn public(mut self, key: impl Into<String>, value: impl Into<ValueSource>) -> Self {
        self.runtime_config.public.insert(key.into(), value.into());
        self
    }

    /// Parse a TOML definition.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse {
            format: "toml",
            message: e.to_string(),
        })
    }

    /// Parse a JSON definition.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Read a definition file. The extension (`toml` or `json`) selects the format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read configuration definition");
        parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TOML_DEFINITION: &str = r#"
compatibilityDate = "2025-07-15"
modules = ["tailwind"]

[devtools]
enabled = true

[runtimeConfig]
EDITING_CODE = ""
apiSecret = { env = "API_SECRET", required = true }

[runtimeConfig.public]
EDITING_CODE = ""
"#;

    #[test]
    fn parses_toml_definition() {
        let def = ConfigDefinition::from_toml_str(TOML_DEFINITION).unwrap();
        assert_eq!(def.compatibility_date.as_deref(), Some("2025-07-15"));
        assert!(def.devtools.enabled);
        assert_eq!(def.modules, vec!["tailwind"]);
        assert_eq!(
            def.runtime_config.private.get("EDITING_CODE"),
            Some(&ValueSource::Literal(String::new()))
        );
        assert_eq!(
            def.runtime_config.private.get("apiSecret"),
            Some(&ValueSource::required_env("API_SECRET"))
        );
        assert_eq!(def.runtime_config.public.len(), 1);
        assert!(!def.runtime_config.private.contains_key("public"));
    }

    #[test]
    fn parses_json_definition() {
        let def = ConfigDefinition::from_json_str(
            r#"{
                "compatibilityDate": "2025-07-15",
                "devtools": { "enabled": true },
                "modules": ["tailwind"],
                "runtimeConfig": {
                    "EDITING_CODE": "",
                    "public": { "EDITING_CODE": "" }
                },
                "app": {}
            }"#,
        )
        .unwrap();
        let expected = ConfigDefinition::new("2025-07-15")
            .devtools(true)
            .module("tailwind")
            .private("EDITING_CODE", "")
            .public("EDITING_CODE", "");
        assert_eq!(def, expected);
    }

    #[test]
    fn sections_default_when_absent() {
        let def = ConfigDefinition::from_json_str("{}").unwrap();
        assert!(def.compatibility_date.is_none());
        assert!(!def.devtools.enabled);
        assert!(def.modules.is_empty());
        assert!(def.runtime_config.private.is_empty());
        assert!(def.runtime_config.public.is_empty());
        assert!(def.app.base_url.is_none());
        assert!(def.app.build_assets_dir.is_none());
    }

    #[test]
    fn parses_app_paths() {
        let def = ConfigDefinition::from_json_str(
            r#"{ "app": { "baseURL": "/workshops/", "buildAssetsDir": "/_nuxt/" } }"#,
        )
        .unwrap();
        assert_eq!(def.app.base_url.as_deref(), Some("/workshops/"));
        assert_eq!(def.app.build_assets_dir.as_deref(), Some("/_nuxt/"));
    }

    #[test]
    fn env_reference_with_default() {
        let def = ConfigDefinition::from_json_str(
            r#"{ "runtimeConfig": { "token": { "env": "TOKEN", "default": "none" } } }"#,
        )
        .unwrap();
        assert_eq!(
            def.runtime_config.private.get("token"),
            Some(&ValueSource::env_or("TOKEN", "none"))
        );
    }

    #[test]
    fn rejects_misspelled_env_reference_key() {
        let result = ConfigDefinition::from_toml_str(
            r#"
compatibilityDate = "2025-07-15"

[runtimeConfig]
apiSecret = { env = "API_SECRET", requird = true }
"#,
        );
        assert!(matches!(result, Err(ConfigError::Parse { format: "toml", .. })));
    }

    #[test]
    fn rejects_non_string_runtime_value() {
        let result = ConfigDefinition::from_json_str(r#"{ "runtimeConfig": { "port": 3000 } }"#);
        assert!(matches!(result, Err(ConfigError::Parse { format: "json", .. })));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = ConfigDefinition::from_toml_str("compatibilityDate = ");
        assert!(matches!(result, Err(ConfigError::Parse { format: "toml", .. })));
    }

    #[test]
    fn from_path_selects_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("app.config.toml");
        fs::write(&toml_path, TOML_DEFINITION).unwrap();
        let json_path = dir.path().join("app.config.json");
        fs::write(&json_path, r#"{ "compatibilityDate": "2025-07-15" }"#).unwrap();

        let from_toml = ConfigDefinition::from_path(&toml_path).unwrap();
        assert_eq!(from_toml.modules, vec!["tailwind"]);
        let from_json = ConfigDefinition::from_path(&json_path).unwrap();
        assert_eq!(from_json.compatibility_date.as_deref(), Some("2025-07-15"));
    }

    #[test]
    fn from_path_rejects_unknown_extension() {
        let result = ConfigDefinition::from_path("app.config.ts");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let result = ConfigDefinition::from_path("/nonexistent/app.config.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
