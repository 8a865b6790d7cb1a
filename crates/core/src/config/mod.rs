//! Profile configuration for sd-local.
//!
//! A single YAML file holds every named [`Entry`] (API URL, store URL, token,
//! launcher image/version) plus the name of the entry currently in use.
//!
//! - [`Entry`]: one profile and its keyed setter.
//! - [`Config`]: the entry map, the current selector, and load/save.
//! - [`ConfigError`]: every failure the operations above can report.
//!
//! Nothing here resolves home directories or talks to the build service;
//! callers hand in a file path and decide when to [`Config::save`].

mod entry;
mod store;

pub use entry::{Entry, EntryKey, Launcher, DEFAULT_LAUNCHER_IMAGE, DEFAULT_LAUNCHER_VERSION};
pub use store::{Config, DEFAULT_ENTRY_NAME};

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but its contents are not a valid config.
    #[error("failed to parse config file: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
    },

    /// The in-memory config could not be rendered as YAML.
    #[error("failed to serialize config file: {source}")]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config `{name}` does not exist")]
    NotFound { name: String },

    #[error("config `{name}` already exists")]
    AlreadyExists { name: String },

    /// Deleting the current entry would leave `current` dangling.
    #[error("config `{name}` is current config")]
    CurrentEntryProtected { name: String },

    #[error(
        "unknown config key `{key}`; expected one of api-url, store-url, token, launcher-version, launcher-image"
    )]
    UnknownKey { key: String },

    /// Filesystem failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
