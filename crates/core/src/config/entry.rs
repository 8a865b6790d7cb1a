use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigResult};

/// Launcher version used when none is configured.
pub const DEFAULT_LAUNCHER_VERSION: &str = "stable";

/// Launcher image used when none is configured.
pub const DEFAULT_LAUNCHER_IMAGE: &str = "screwdrivercd/launcher";

/// Container reference for the launcher that executes builds locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Launcher {
    /// Image tag (e.g., "stable", "v6.0.100").
    pub version: String,
    /// Image name (e.g., "screwdrivercd/launcher").
    pub image: String,
}

impl Launcher {
    /// Launcher pointing at the default image and version.
    pub fn with_defaults() -> Self {
        Self {
            version: DEFAULT_LAUNCHER_VERSION.to_string(),
            image: DEFAULT_LAUNCHER_IMAGE.to_string(),
        }
    }
}

/// One named profile: where the build service lives and how to talk to it.
///
/// `Entry::default()` is the empty entry (every field blank). Use
/// [`Entry::with_defaults`] for a fresh profile with the default launcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Entry {
    /// Build-service API endpoint.
    #[serde(rename = "api-url")]
    pub api_url: String,
    /// Artifact-store endpoint.
    #[serde(rename = "store-url")]
    pub store_url: String,
    /// Opaque credential; stored as-is.
    pub token: String,
    pub launcher: Launcher,
}

impl Entry {
    /// Entry with empty URLs/token and the default launcher.
    pub fn with_defaults() -> Self {
        Self { launcher: Launcher::with_defaults(), ..Self::default() }
    }

    /// Update a single field by its user-facing key name.
    ///
    /// Unknown keys fail with [`ConfigError::UnknownKey`] and leave the entry untouched.
    pub fn set(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let key: EntryKey = key.parse()?;
        self.set_key(key, value);
        Ok(())
    }

    /// Update a single field.
    ///
    /// An empty value resets the launcher fields to their defaults; the other
    /// fields take the value literally.
    pub fn set_key(&mut self, key: EntryKey, value: &str) {
        match key {
            EntryKey::ApiUrl => self.api_url = value.to_string(),
            EntryKey::StoreUrl => self.store_url = value.to_string(),
            EntryKey::Token => self.token = value.to_string(),
            EntryKey::LauncherVersion => {
                self.launcher.version = or_default(value, DEFAULT_LAUNCHER_VERSION);
            }
            EntryKey::LauncherImage => {
                self.launcher.image = or_default(value, DEFAULT_LAUNCHER_IMAGE);
            }
        }
    }

    /// Read a single field by key.
    pub fn get_key(&self, key: EntryKey) -> &str {
        match key {
            EntryKey::ApiUrl => &self.api_url,
            EntryKey::StoreUrl => &self.store_url,
            EntryKey::Token => &self.token,
            EntryKey::LauncherVersion => &self.launcher.version,
            EntryKey::LauncherImage => &self.launcher.image,
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Settable fields of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    ApiUrl,
    StoreUrl,
    Token,
    LauncherVersion,
    LauncherImage,
}

impl EntryKey {
    /// Every key, in display order.
    pub const ALL: [EntryKey; 5] = [
        EntryKey::ApiUrl,
        EntryKey::StoreUrl,
        EntryKey::Token,
        EntryKey::LauncherVersion,
        EntryKey::LauncherImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKey::ApiUrl => "api-url",
            EntryKey::StoreUrl => "store-url",
            EntryKey::Token => "token",
            EntryKey::LauncherVersion => "launcher-version",
            EntryKey::LauncherImage => "launcher-image",
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey { key: s.to_string() })
    }
}
