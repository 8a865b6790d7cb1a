use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use sdlocal_core::config::{Config, Entry, EntryKey};
use serde::Serialize;

use crate::open_config;

#[derive(Serialize)]
pub struct ConfigViewSnapshot<'a> {
    pub config_file: String,
    pub current: &'a str,
    pub entries: &'a BTreeMap<String, Entry>,
}

impl<'a> ConfigViewSnapshot<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config_file: config.file_path().display().to_string(),
            current: config.current(),
            entries: config.entries(),
        }
    }
}

/// Print every entry; the current one is marked with `*`.
pub fn view_config_command(path: &Path, json: bool) -> Result<()> {
    let config = open_config(path)?;

    if json {
        let serialized = serde_json::to_string_pretty(&ConfigViewSnapshot::new(&config))
            .context("Failed to serialize config to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_config_view(&config));
    }
    Ok(())
}

/// Print the name of the current entry.
pub fn current_config_command(path: &Path) -> Result<()> {
    let config = open_config(path)?;
    println!("{}", config.current());
    Ok(())
}

/// Human-readable listing of all entries.
pub fn render_config_view(config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("Configs ({}):\n", config.entries().len()));

    for (name, entry) in config.entries() {
        let marker = if name == config.current() { "*" } else { " " };
        out.push_str(&format!("{marker} {name}\n"));
        for key in EntryKey::ALL {
            let value = entry.get_key(key);
            let shown = if value.is_empty() { "-" } else { value };
            out.push_str(&format!("    {key}: {shown}\n"));
        }
    }
    out
}
