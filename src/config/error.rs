//! Configuration error type.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a configuration definition cannot be loaded.
///
/// None of these are recoverable locally. The process bootstrap should abort
/// startup instead of serving requests with an invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is absent from the definition.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// `compatibilityDate` is not a valid `YYYY-MM-DD` date.
    #[error("invalid compatibility date `{value}`: {reason}")]
    InvalidDate { value: String, reason: String },

    /// A module identifier is empty or contains whitespace.
    #[error("invalid module identifier at position {index}: `{value}`")]
    InvalidModule { index: usize, value: String },

    /// An environment reference marked `required` is unset.
    #[error("required environment variable `{var}` for `{key}` is not set")]
    MissingEnv { key: String, var: String },

    /// The definition text could not be parsed.
    #[error("parse error in {format} definition: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// The definition file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition file extension is not a supported format.
    #[error("unsupported definition format for {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}
