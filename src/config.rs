//! Configuration primitives for the refusal responder.
//!
//! Stored in a machine-readable TOML file located at:
//!   `$FUNDGUARD_HOME/config/responder.toml` when the variable is set
//!   `<OS data dir>/FundGuard/config/responder.toml` otherwise
//!
//! The request path never reads this file. Callers load it once and hand the
//! result to `RefusalResponder::with_config`.

use crate::refusal::suggestions::DEFAULT_SUGGESTION_COUNT;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "responder.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponderConfig {
    /// Number of factual questions attached to each refusal.
    #[serde(default = "default_suggestion_count")]
    pub default_suggestion_count: usize,
    /// Emit a `RefusalAuditEntry` JSON line for every refusal.
    #[serde(default)]
    pub audit_enabled: bool,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            default_suggestion_count: default_suggestion_count(),
            audit_enabled: false,
        }
    }
}

const fn default_suggestion_count() -> usize {
    DEFAULT_SUGGESTION_COUNT
}

/// Resolve the root directory:
/// 1. `FUNDGUARD_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("FUNDGUARD_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("FundGuard"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<ResponderConfig> {
    load_from_path(config_file_path()?)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ResponderConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no responder config, using defaults");
        return Ok(ResponderConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: ResponderConfig = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Persists the configuration to disk.
pub fn save(config: &ResponderConfig) -> Result<PathBuf> {
    let path = config_file_path()?;
    save_to_path(config, &path)?;
    Ok(path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &ResponderConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating config directory {:?}", parent))?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}
