use std::path::Path;

use anyhow::Result;
use sdlocal_core::config::Entry;
use tracing::debug;

use crate::open_config;

/// Add a new entry with the default launcher settings.
pub fn create_config_command(path: &Path, name: &str) -> Result<()> {
    let mut config = open_config(path)?;
    config.add_entry(name, Entry::with_defaults())?;
    config.save()?;

    println!("Created config `{name}` in {}", path.display());
    Ok(())
}

/// Remove an entry. The current entry must be switched away from first.
pub fn delete_config_command(path: &Path, name: &str) -> Result<()> {
    let mut config = open_config(path)?;
    config.delete_entry(name)?;
    config.save()?;

    println!("Deleted config `{name}`");
    Ok(())
}

/// Set one field on the named entry, or on the current entry when no name is given.
///
/// An empty value resets `launcher-version` / `launcher-image` to their defaults.
pub fn set_config_command(path: &Path, key: &str, value: &str, name: Option<&str>) -> Result<()> {
    let mut config = open_config(path)?;
    let target = name.map(str::to_string).unwrap_or_else(|| config.current().to_string());
    debug!(entry = %target, key, "updating config entry");

    config.entry_mut(&target)?.set(key, value)?;
    config.save()?;

    println!("Updated `{key}` of config `{target}`");
    Ok(())
}

/// Make `name` the current entry.
pub fn use_config_command(path: &Path, name: &str) -> Result<()> {
    let mut config = open_config(path)?;
    config.set_current(name)?;
    config.save()?;

    println!("Switched to config `{name}`");
    Ok(())
}
