//! Shared setup for the host binaries: diagnostics and optional rules files.

use std::fs;
use std::io;
use std::path::Path;

use abyss_core::Rules;
use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays machine-readable. `RUST_LOG` overrides the level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(io::stderr)
        .init();
}

/// Reads a TOML rules file, or the standard rules when no path is given.
pub fn load_rules(path: Option<&Path>) -> Result<Rules> {
    let Some(path) = path else {
        return Ok(Rules::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    let rules: Rules = toml::from_str(&text)
        .with_context(|| format!("Failed to parse rules TOML: {}", path.display()))?;
    rules.validate().with_context(|| format!("Invalid rules in {}", path.display()))?;
    Ok(rules)
}
