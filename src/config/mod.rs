//! Configuration management
//!
//! A small JSON config under the platform config directory: theme choice
//! and speech engine settings. The deck files live in the data directory
//! (see [`crate::catalog`]). Session state (selection, visited cards) is
//! deliberately not persisted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::narrator::SpeechSettings;
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Speech engine and voice settings
    #[serde(default)]
    pub speech: SpeechSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Desert Night".to_string(),
            custom_theme: None,
            speech: SpeechSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "abjad").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path (deck files live here)
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "abjad").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme.clone().unwrap_or_else(Theme::desert_night)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_has_desert_night_theme() {
        let config = Config::default();
        assert_eq!(config.theme, "Desert Night");
        assert_eq!(config.active_theme().name, "Desert Night");
    }

    #[test]
    fn default_config_speaks_arabic() {
        let config = Config::default();
        assert_eq!(config.speech.language, "ar-SA");
        assert_eq!(config.speech.program, "espeak-ng");
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("Desert Night"));
        assert!(json.contains("espeak-ng"));
    }

    #[test]
    fn config_deserializes_with_missing_speech_block() {
        let json = r#"{"theme":"Custom"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, "Custom");
        // Missing block falls back to defaults
        assert_eq!(config.speech.rate, 0.7);
    }
}
