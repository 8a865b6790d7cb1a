use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sd_local::commands::{
    create_config_command, current_config_command, delete_config_command, set_config_command,
    use_config_command, view_config_command,
};
use sd_local::{resolve_config_path, telemetry};
use tracing::debug;

/// Run Screwdriver builds locally.
///
/// This CLI is a thin wrapper around `sdlocal-core` (exposed in code as
/// `sdlocal_core`). Profile handling lives in the library so it can be tested
/// thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(name = "sd-local", version, about = "Run Screwdriver builds locally", long_about = None)]
struct Cli {
    /// Path to the config file. Defaults to ~/.sdlocal/config.
    #[arg(long, global = true, env = "SDLOCAL_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage sd-local configs (named profiles).
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Create a new config with the default launcher settings.
    Create {
        /// Name of the new config.
        name: String,
    },

    /// Delete a config. The current config cannot be deleted.
    Delete {
        /// Name of the config to delete.
        name: String,
    },

    /// Set a value on a config.
    ///
    /// Keys: api-url, store-url, token, launcher-version, launcher-image.
    /// An empty value resets launcher-version/launcher-image to their defaults.
    Set {
        /// Key to update.
        key: String,

        /// New value. Omit to set an empty value.
        #[arg(default_value = "")]
        value: String,

        /// Config to update. Defaults to the current config.
        #[arg(long)]
        name: Option<String>,
    },

    /// Switch the current config.
    Use {
        /// Name of the config to use.
        name: String,
    },

    /// Show all configs; the current one is marked with `*`.
    View {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the name of the current config.
    Current,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose)?;
    debug!(core_version = sdlocal_core::version(), "starting sd-local");

    let path = resolve_config_path(cli.config)?;

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Create { name } => create_config_command(&path, &name)?,
            ConfigCommand::Delete { name } => delete_config_command(&path, &name)?,
            ConfigCommand::Set { key, value, name } => {
                set_config_command(&path, &key, &value, name.as_deref())?
            }
            ConfigCommand::Use { name } => use_config_command(&path, &name)?,
            ConfigCommand::View { json } => view_config_command(&path, json)?,
            ConfigCommand::Current => current_config_command(&path)?,
        },
    }

    Ok(())
}
