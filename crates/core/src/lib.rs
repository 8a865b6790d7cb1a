//! sdlocal-core
//!
//! Core library for the sd-local profile configuration file.
//!
//! This crate defines the profile model (entries, launcher reference), the
//! config file that holds them, and the load/mutate/save contract around it.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends; the CLI only resolves paths and prints.

pub mod config;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
