//! User configuration
//!
//! Stored as TOML at `<config_dir>/lsviz/config.toml`. A missing file means
//! defaults; missing fields inside an existing file are filled with defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Smallest accepted autoplay interval.
pub const MIN_INTERVAL_MS: u64 = 50;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub display: DisplayConfig,
}

/// Autoplay settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between autoplay steps, in milliseconds
    pub interval_ms: u64,
    /// Start autoplay right after a successful submission
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            autoplay: false,
        }
    }
}

impl PlaybackConfig {
    /// Autoplay interval, raised to [`MIN_INTERVAL_MS`] if configured lower.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Theme name: default, classic or ocean
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("lsviz").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        if config.playback.interval_ms < MIN_INTERVAL_MS {
            warn!(
                interval_ms = config.playback.interval_ms,
                min = MIN_INTERVAL_MS,
                "autoplay interval too small, clamping"
            );
        }
        Ok(config)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
