//! Resolved, immutable configuration.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Fully resolved configuration, produced once by
/// [`ConfigProvider::load`](super::ConfigProvider::load).
///
/// There are no setters. Share it by reference or `Arc` with everything that
/// needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationSet {
    pub(super) compatibility_date: NaiveDate,
    pub(super) devtools_enabled: bool,
    pub(super) enabled_modules: Vec<String>,
    pub(super) secrets: PrivateConfig,
    pub(super) public_values: PublicConfig,
    pub(super) app: AppPaths,
}

impl ConfigurationSet {
    pub fn compatibility_date(&self) -> NaiveDate {
        self.compatibility_date
    }

    pub fn devtools_enabled(&self) -> bool {
        self.devtools_enabled
    }

    /// Module identifiers in declaration order.
    pub fn enabled_modules(&self) -> &[String] {
        &self.enabled_modules
    }

    /// The private surface. Server-side use only.
    pub fn secrets(&self) -> &PrivateConfig {
        &self.secrets
    }

    /// The public surface, safe to deliver to clients.
    pub fn public_values(&self) -> &PublicConfig {
        &self.public_values
    }

    pub fn app(&self) -> &AppPaths {
        &self.app
    }
}

/// Deployment paths. Left as `None` unless the definition sets them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppPaths {
    pub base_url: Option<String>,
    pub build_assets_dir: Option<String>,
}

/// Private runtime values.
///
/// Not `Serialize`. `Debug` prints keys only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PrivateConfig {
    values: BTreeMap<String, String>,
}

/// Public runtime values. Serializes as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublicConfig {
    values: BTreeMap<String, String>,
}

macro_rules! impl_surface {
    ($ty:ident) => {
        impl $ty {
            pub(super) fn from_map(values: BTreeMap<String, String>) -> Self {
                Self { values }
            }

            pub fn get(&self, key: &str) -> Option<&str> {
                self.values.get(key).map(String::as_str)
            }

            pub fn contains_key(&self, key: &str) -> bool {
                self.values.contains_key(key)
            }

            /// Keys in sorted order.
            pub fn keys(&self) -> impl Iterator<Item = &str> {
                self.values.keys().map(String::as_str)
            }

            pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
                self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
            }

            pub fn len(&self) -> usize {
                self.values.len()
            }

            pub fn is_empty(&self) -> bool {
                self.values.is_empty()
            }
        }
    };
}

impl_surface!(PrivateConfig);
impl_surface!(PublicConfig);

impl fmt::Debug for PrivateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.keys().map(|k| (k, "<redacted>")))
            .finish()
    }
}
