//! Configuration management for Statusmaker

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::emoji::{default_candidates, DEFAULT_RECENT_WINDOW};
use crate::error::{ConfigError, Result};

/// Headline a new session starts with
pub const DEFAULT_HEADLINE: &str = "A quick summary...";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub emoji: EmojiConfig,
    pub clipboard: ClipboardConfig,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    pub candidates: Vec<String>,
    /// Recent picks to avoid; clamped to 1..candidates-1
    pub recent_window: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Clipboard command line; detected from `PATH` when unset
    pub command: Option<String>,
    /// Use the OSC 52 terminal sequence when no command is available
    pub osc52_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Ring the terminal bell on add and copy
    pub sound: bool,
    pub tick_rate_ms: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            headline: DEFAULT_HEADLINE.to_string(),
        }
    }
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            recent_window: DEFAULT_RECENT_WINDOW,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            command: None,
            osc52_fallback: true,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sound: true,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("STATUSMAKER_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("statusmaker").join("config.toml"))
}
