use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use sdlocal_core::config::Config;

pub mod commands;
pub mod telemetry;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SDLOCAL_CONFIG";

/// Directory under the user's home that holds sd-local state.
pub const CONFIG_DIR_NAME: &str = ".sdlocal";

/// File name of the profile config inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config";

/// `<home>/.sdlocal/config`.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the config path: explicit override (flag or env) first, then the default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => default_config_path(),
    }
}

/// Make sure the directory holding `path` exists, then load (or create) the config.
pub fn open_config(path: &Path) -> Result<Config> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
    }
    Ok(Config::new(path)?)
}
