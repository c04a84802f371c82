//! Configuration management for tripplanner.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::array;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "tripplanner";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TRIPPLANNER_`)
/// 2. TOML config file at `~/.config/tripplanner/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Itinerary container configuration.
    pub itinerary: ItineraryConfig,
    /// Console UI configuration.
    pub ui: UiConfig,
}

/// Itinerary container configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryConfig {
    /// Capacity the itinerary starts with.
    pub initial_capacity: usize,
    /// Maximum number of destinations the shell will accept.
    /// Set to 0 for unlimited.
    pub max_entries: usize,
}

/// Console UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Clear the screen before showing the menu.
    pub clear_screen: bool,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: array::DEFAULT_CAPACITY,
            max_entries: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("TRIPPLANNER_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.itinerary.max_entries != 0
            && self.itinerary.initial_capacity > self.itinerary.max_entries
        {
            return Err(Error::ConfigValidation {
                message: format!(
                    "initial_capacity ({}) cannot be greater than max_entries ({})",
                    self.itinerary.initial_capacity, self.itinerary.max_entries
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.itinerary.initial_capacity, 4);
        assert_eq!(config.itinerary.max_entries, 0);
        assert!(config.ui.clear_screen);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unlimited_entries_ignores_capacity() {
        let mut config = Config::default();
        config.itinerary.initial_capacity = 1000;
        config.itinerary.max_entries = 0;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_capacity_above_cap() {
        let mut config = Config::default();
        config.itinerary.initial_capacity = 16;
        config.itinerary.max_entries = 8;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("initial_capacity"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("tripplanner"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("initial_capacity"));
        assert!(json.contains("clear_screen"));
    }

    #[test]
    fn test_itinerary_config_deserialize() {
        let json = r#"{"initial_capacity": 2, "max_entries": 50}"#;
        let itinerary: ItineraryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(itinerary.initial_capacity, 2);
        assert_eq!(itinerary.max_entries, 50);
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
