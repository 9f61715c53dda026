//! Environment lookup used during configuration loading.

use std::collections::HashMap;

/// Read-only view of environment variables.
///
/// [`ConfigProvider`](super::ConfigProvider) reads the environment only through
/// this trait, so loading can be driven by the real process environment or by
/// an in-memory map.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
///
/// Variables whose value is not valid unicode are treated as unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment.
///
/// # Example
///
/// ```rust
/// use runtime_config::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().with("EDITING_CODE", "abc123");
/// assert_eq!(env.var("EDITING_CODE").as_deref(), Some("abc123"));
/// assert!(env.var("OTHER").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Convert a config key to its environment variable name.
///
/// Camel case boundaries become underscores and everything is upper cased,
/// so `apiSecret` becomes `API_SECRET`. Keys already in upper snake case are
/// returned unchanged. Dashes and dots map to underscores.
pub fn env_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if c == '-' || c == '.' {
            out.push('_');
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.extend(c.to_uppercase());
    }
    out
}
