//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution. Only preferences live here (theme, palettes, sample lists,
//! spin tuning); wheel lists and histories are ephemeral per session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Spin animation tuning.
///
/// These are presentation details, not behavioral contracts: the selection
/// math is independent of how long the animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Animation duration in milliseconds
    #[serde(default = "default_spin_duration_ms")]
    pub duration_ms: u64,
}

/// Default spin animation duration (matches the classic 4.2 s spin).
fn default_spin_duration_ms() -> u64 {
    4200
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_spin_duration_ms(),
        }
    }
}

/// Per-wheel palette and sample data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Display title of the wheel
    pub title: String,
    /// Category icon shown in results and history
    pub icon: String,
    /// Lower bound of the hue band in degrees
    pub hue_min: f64,
    /// Upper bound of the hue band in degrees
    pub hue_max: f64,
    /// Sample entries loadable on demand
    pub sample: Vec<String>,
}

impl WheelConfig {
    /// Default "people" wheel: blue hue band with sample names.
    #[must_use]
    pub fn people() -> Self {
        Self {
            title: "People".to_string(),
            icon: "👤".to_string(),
            hue_min: 210.0,
            hue_max: 255.0,
            sample: [
                "小林さん",
                "田中くん",
                "はるか",
                "りく",
                "さくら",
                "Hiro",
                "Mina",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Default "songs" wheel: green hue band with sample titles.
    #[must_use]
    pub fn songs() -> Self {
        Self {
            title: "Songs".to_string(),
            icon: "🎵".to_string(),
            hue_min: 120.0,
            hue_max: 165.0,
            sample: [
                "Pretender (Official髭男dism)",
                "Lemon (米津玄師)",
                "アイドル (YOASOBI)",
                "うっせぇわ (Ado)",
                "花に亡霊 (ヨルシカ)",
                "夜に駆ける (YOASOBI)",
                "廻廻奇譚 (Eve)",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Both wheels' palette configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelsConfig {
    /// The "people" wheel
    pub people: WheelConfig,
    /// The "songs" wheel
    pub songs: WheelConfig,
}

impl Default for WheelsConfig {
    fn default() -> Self {
        Self {
            people: WheelConfig::people(),
            songs: WheelConfig::songs(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/WheelSpin/config.toml`
/// - macOS: `~/Library/Application Support/WheelSpin/config.toml`
/// - Windows: `%APPDATA%\WheelSpin\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Spin animation tuning
    #[serde(default)]
    pub spin: SpinConfig,
    /// Per-wheel palettes and samples
    #[serde(default)]
    pub wheels: WheelsConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("WheelSpin");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to move config file into place: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Hue bands must be non-empty ranges within 0-360 and the spin
    /// duration must be non-zero.
    pub fn validate(&self) -> Result<()> {
        for wheel in [&self.wheels.people, &self.wheels.songs] {
            if !(0.0..=360.0).contains(&wheel.hue_min)
                || !(0.0..=360.0).contains(&wheel.hue_max)
                || wheel.hue_min >= wheel.hue_max
            {
                anyhow::bail!(
                    "Invalid hue range {}-{} for wheel '{}' (expected 0 <= min < max <= 360)",
                    wheel.hue_min,
                    wheel.hue_max,
                    wheel.title
                );
            }
            if wheel.icon.is_empty() {
                anyhow::bail!("Wheel '{}' has an empty icon", wheel.title);
            }
        }

        if self.spin.duration_ms == 0 {
            anyhow::bail!("Spin duration must be greater than zero");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spin.duration_ms, 4200);
        assert_eq!(config.wheels.people.hue_min, 210.0);
        assert_eq!(config.wheels.songs.hue_max, 165.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[ui]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(parsed.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(parsed.spin.duration_ms, 4200);
        assert_eq!(parsed.wheels.people.icon, "👤");
    }

    #[test]
    fn test_invalid_hue_range_rejected() {
        let mut config = Config::default();
        config.wheels.people.hue_min = 300.0;
        config.wheels.people.hue_max = 200.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut config = Config::default();
        config.spin.duration_ms = 0;
        assert!(config.validate().is_err());
    }
}
