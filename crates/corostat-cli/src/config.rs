use crate::types::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "COROSTAT_CONFIG";

/// Where the configuration was looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag; the file must exist
    Explicit(PathBuf),
    /// `COROSTAT_CONFIG` or the XDG default; a missing file means defaults
    Implicit(PathBuf),
    /// No candidate path could be determined
    None,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Implicit(path) => Some(path),
            ConfigSource::None => None,
        }
    }
}

/// Resolve the config file location based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. COROSTAT_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (`<config_dir>/corostat/config.toml`)
pub fn resolve_config_path(explicit_path: Option<&str>) -> ConfigSource {
    if let Some(path) = explicit_path {
        return ConfigSource::Explicit(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return ConfigSource::Implicit(expand_tilde(&env_path));
    }

    match dirs::config_dir() {
        Some(dir) => ConfigSource::Implicit(dir.join("corostat").join("config.toml")),
        None => ConfigSource::None,
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Captured `corosync-cfgtool -s` output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_status: Option<PathBuf>,
    /// Captured `corosync-quorumtool -p` output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quorum_status: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(source: &ConfigSource) -> Result<Self> {
        match source {
            ConfigSource::Explicit(path) => {
                if !path.exists() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                Self::load_from(path)
            }
            ConfigSource::Implicit(path) => Self::load_from(path),
            ConfigSource::None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
