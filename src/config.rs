//! Configuration management for weatherkit
//!
//! TOML-based configuration with defaults and validation.
//! Location: ~/.weatherkit/config.toml

use crate::errors::{Result, WeatherKitError};
use crate::formatting::{IconResolution, TemperatureUnit};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration for weatherkit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub temperature_unit: TemperatureUnit,
    pub icon_resolution: IconResolution,
    pub use_24_hour_clock: bool,
}

/// Log sink configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Fahrenheit,
            icon_resolution: IconResolution::Double,
            use_24_hour_clock: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        let config: Config = toml::from_str(&contents)?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, or built-in defaults if absent
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(config_path) if config_path.exists() => Self::load_from_file(&config_path),
            _ => Ok(Config::default()),
        }
    }

    /// `~/.weatherkit/config.toml`, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".weatherkit").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(WeatherKitError::ConfigError(format!(
                    "Invalid log level: {}",
                    self.logging.level
                )))
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| WeatherKitError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.display.icon_resolution, IconResolution::Double);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [display]
            temperature_unit = "celsius"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.display.icon_resolution, IconResolution::Double);
        assert!(config.logging.ansi);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [display]
            temperature_unit = "rankine"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.temperature_unit = TemperatureUnit::Kelvin;
        config.display.icon_resolution = IconResolution::Quadruple;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path.clone())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load_from_file(&path),
            Err(WeatherKitError::IoError(_))
        ));
    }

    #[test]
    fn test_load_invalid_level_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(WeatherKitError::ConfigError(_))
        ));
    }
}
