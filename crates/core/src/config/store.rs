use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ConfigResult, Entry};

/// Name of the entry written into a newly created config file.
pub const DEFAULT_ENTRY_NAME: &str = "default";

/// Every known profile plus the one currently selected.
///
/// The config owns its entries outright. Read them with [`Config::entry`],
/// change them through [`Config::entry_mut`], and call [`Config::save`] to
/// persist; no operation writes to disk on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    entries: BTreeMap<String, Entry>,
    #[serde(default)]
    current: String,
    #[serde(skip)]
    file_path: PathBuf,
}

impl Config {
    /// Load the config at `path`, first writing a default file if none exists.
    pub fn new(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        Self::create(path)?;

        debug!(path = %path.display(), "loading config file");
        let body = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&body)?;
        config.file_path = path.to_path_buf();

        debug!(
            path = %path.display(),
            entries = config.entries.len(),
            current = %config.current,
            "loaded config file"
        );
        Ok(config)
    }

    /// Write a config holding only the default entry to `path`.
    ///
    /// Does nothing when a file is already there; existing content is never
    /// overwritten. The parent directory must exist.
    pub fn create(path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let file = match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "config file already exists");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let yaml = Self::fresh(path).to_yaml()?;
        write_or_remove(file, path, yaml.as_bytes())?;
        info!(path = %path.display(), entry = DEFAULT_ENTRY_NAME, "created config file");
        Ok(())
    }

    /// In-memory config with a single default entry, bound to `path`.
    pub fn fresh(path: impl AsRef<Path>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_ENTRY_NAME.to_string(), Entry::with_defaults());
        Self {
            entries,
            current: DEFAULT_ENTRY_NAME.to_string(),
            file_path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse a config from YAML text.
    ///
    /// The result is not bound to a file; `current` must name one of the entries.
    pub fn from_yaml(body: &str) -> ConfigResult<Self> {
        if body.trim().is_empty() {
            let source = serde_yaml::Error::custom("config file is empty");
            return Err(ConfigError::Parse { source });
        }

        let config: Self =
            serde_yaml::from_str(body).map_err(|source| ConfigError::Parse { source })?;

        if !config.entries.contains_key(&config.current) {
            let source = serde_yaml::Error::custom(format!(
                "current config `{}` does not exist",
                config.current
            ));
            return Err(ConfigError::Parse { source });
        }
        Ok(config)
    }

    /// Render the entries and current selector as YAML.
    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(|source| ConfigError::Serialize { source })
    }

    /// Overwrite the backing file with the full config.
    pub fn save(&self) -> ConfigResult<()> {
        let yaml = self.to_yaml()?;
        fs::write(&self.file_path, yaml)?;
        debug!(path = %self.file_path.display(), "saved config file");
        Ok(())
    }

    /// Look up an entry by name.
    pub fn entry(&self, name: &str) -> ConfigResult<&Entry> {
        self.entries.get(name).ok_or_else(|| not_found(name))
    }

    /// Mutable handle to an entry, borrowed from this config.
    pub fn entry_mut(&mut self, name: &str) -> ConfigResult<&mut Entry> {
        self.entries.get_mut(name).ok_or_else(|| not_found(name))
    }

    /// The entry named by [`Config::current`].
    pub fn current_entry(&self) -> ConfigResult<&Entry> {
        self.entry(&self.current)
    }

    pub fn current_entry_mut(&mut self) -> ConfigResult<&mut Entry> {
        let current = self.current.clone();
        self.entry_mut(&current)
    }

    /// Register a new entry under `name`. The current selection is unchanged.
    pub fn add_entry(&mut self, name: impl Into<String>, entry: Entry) -> ConfigResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(ConfigError::AlreadyExists { name });
        }
        debug!(name = %name, "adding config entry");
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Remove an entry. The current entry cannot be removed.
    pub fn delete_entry(&mut self, name: &str) -> ConfigResult<()> {
        if !self.entries.contains_key(name) {
            return Err(not_found(name));
        }
        if self.current == name {
            return Err(ConfigError::CurrentEntryProtected { name: name.to_string() });
        }
        debug!(name = %name, "deleting config entry");
        self.entries.remove(name);
        Ok(())
    }

    /// Select the entry used by default.
    pub fn set_current(&mut self, name: &str) -> ConfigResult<()> {
        if !self.entries.contains_key(name) {
            return Err(not_found(name));
        }
        debug!(from = %self.current, to = %name, "switching current config");
        self.current = name.to_string();
        Ok(())
    }

    /// Name of the entry currently in use.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn entries(&self) -> &BTreeMap<String, Entry> {
        &self.entries
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Path this config was loaded from; empty for configs built from text.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

fn not_found(name: &str) -> ConfigError {
    ConfigError::NotFound { name: name.to_string() }
}

/// Write a freshly created file. On failure the file is removed again.
fn write_or_remove(mut file: impl Write, path: &Path, bytes: &[u8]) -> ConfigResult<()> {
    if let Err(err) = file.write_all(bytes).and_then(|_| file.flush()) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(
                path = %path.display(),
                error = %remove_err,
                "failed to remove partial config file"
            );
        }
        return Err(err.into());
    }
    Ok(())
}
