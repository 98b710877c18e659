//! Generator configuration.
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object is a valid config.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_HIGHLIGHT_PAUSE_MSEC: u32 = 200;
pub const DEFAULT_SLEEP_BASE_MSEC: u32 = 1000;
pub const DEFAULT_CREDENTIAL_SEPARATOR: &str = ":";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Pause between a highlight and the action it precedes.
    pub highlight_pause_msec: u32,
    /// Base for the named pause helpers; scaling it speeds up or slows down a suite.
    pub sleep_base_msec: u32,
    /// Delimiter between user, env, and password in credential entries.
    pub credential_separator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            highlight_pause_msec: DEFAULT_HIGHLIGHT_PAUSE_MSEC,
            sleep_base_msec: DEFAULT_SLEEP_BASE_MSEC,
            credential_separator: DEFAULT_CREDENTIAL_SEPARATOR.to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load `path` when given, otherwise fall back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(GeneratorConfig::default()),
    }
}

pub fn validate_config(config: &GeneratorConfig) -> Result<()> {
    if config.credential_separator.is_empty() {
        return Err(anyhow!("credential_separator must be non-empty"));
    }
    if config.sleep_base_msec == 0 {
        return Err(anyhow!("sleep_base_msec must be greater than zero"));
    }
    Ok(())
}
