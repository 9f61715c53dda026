//! Runtime Config - static application configuration with private and public surfaces.
//!
//! This crate loads a declarative configuration definition once at startup and
//! exposes it as an immutable [`ConfigurationSet`]:
//!
//! - **config**: Definition parsing, environment overrides and validation
//! - **bootstrap**: Tracing initialization and one-shot startup loading
//! - **serve**: HTTP endpoint delivering the public surface to clients
//!
//! # Features
//!
//! - `config` - Definition parsing and loading (enabled by default)
//! - `bootstrap` - Tracing setup and startup helper (enabled by default)
//! - `serve` - axum router for the public surface
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use runtime_config::{init_tracing, startup};
//!
//! fn main() {
//!     init_tracing("runtime_config=debug,info");
//!     let config = match startup("app.config.toml") {
//!         Ok(config) => config,
//!         Err(e) => {
//!             eprintln!("invalid configuration: {e}");
//!             std::process::exit(1);
//!         }
//!     };
//!
//!     // Server code reads secrets, clients only ever see the public values.
//!     let code = config.secrets().get("EDITING_CODE");
//!     let router = runtime_config::public_router(config.clone());
//! }
//! ```

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "serve")]
pub mod serve;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
#[cfg(feature = "config")]
pub use config::{
    ConfigDefinition, ConfigError, ConfigProvider, ConfigurationSet, EnvSource, MapEnv,
    PrivateConfig, ProcessEnv, PublicConfig, ValueSource,
};

#[cfg(feature = "serve")]
pub use serve::{public_router, serve};

#[cfg(feature = "bootstrap")]
pub use bootstrap::{init_tracing, startup};
