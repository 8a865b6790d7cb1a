//! Logging setup for the CLI.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `verbose`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
