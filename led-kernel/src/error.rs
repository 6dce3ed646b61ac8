//! Configuration error types
//!
//! The per-pixel kernel never fails; errors only arise when loading or
//! validating [`crate::config::KernelConfig`].

use std::path::PathBuf;

/// Error loading or validating kernel configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`crate::config::KernelConfig`]
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A numeric field lies outside its accepted range
    #[error("{field} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
