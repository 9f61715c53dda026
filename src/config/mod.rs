//! Configuration loading with environment variable overrides.

mod definition;
mod env;
mod error;
mod provider;
mod set;

pub use definition::{
    AppDefinition, ConfigDefinition, DevtoolsDefinition, EnvReference, RuntimeConfigDefinition,
    ValueSource,
};
pub use env::{env_name, EnvSource, MapEnv, ProcessEnv};
pub use error::ConfigError;
pub use provider::ConfigProvider;
pub use set::{AppPaths, ConfigurationSet, PrivateConfig, PublicConfig};
