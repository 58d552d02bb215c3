//! Configuration settings for mindful.
//!
//! Settings are loaded from `~/.mindful/config.yaml`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::MindfulError;
use crate::features::breathing::PhaseConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Breathing exercise settings.
    pub breathing: BreathingSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Breathing exercise settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingSettings {
    /// Phase durations in seconds.
    pub pattern: PhaseConfig,
    /// Ring the terminal bell on each phase change.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Flash the screen on each phase change.
    #[serde(default = "default_true")]
    pub vibration: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for BreathingSettings {
    fn default() -> Self {
        Self {
            pattern: PhaseConfig::default(),
            sound: default_true(),
            vibration: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, MindfulError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// A breathing pattern with a zero-length phase is rejected here.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, MindfulError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            MindfulError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config = serde_yaml::from_str(&contents).map_err(|e| {
            MindfulError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), MindfulError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), MindfulError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            MindfulError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns `MindfulError::Yaml` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, MindfulError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::Phase;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.breathing.pattern, PhaseConfig::default());
        assert!(config.breathing.sound);
        assert!(config.breathing.vibration);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.breathing.pattern = PhaseConfig::new(4, 7, 8).unwrap();
        config.breathing.sound = false;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.breathing.pattern.duration(Phase::Hold), 7);
        assert!(!loaded.breathing.sound);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r#"
breathing:
  vibration: false
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert!(!config.breathing.vibration);
        // Defaults should be used for missing fields
        assert!(config.breathing.sound);
        assert_eq!(config.breathing.pattern, PhaseConfig::default());
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_zero_phase_rejected_at_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r#"
breathing:
  pattern:
    inhale: 4
    hold: 0
    exhale: 8
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, MindfulError::Config(_)));
        assert!(err.to_string().contains("Hold duration"));
    }
}
