use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::eraser::EraserConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::stroke::StrokeSettings;

/// Environment variable naming a JSON config file for the native app
pub const CONFIG_ENV_VAR: &str = "TACTICS_BOARD_CONFIG";

/// Board-wide configuration. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Settings a fresh board starts with
    pub default_settings: StrokeSettings,
    pub eraser: EraserConfig,
    /// Number of gestures that can be undone
    pub history_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_settings: StrokeSettings::default(),
            eraser: EraserConfig::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl BoardConfig {
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to the
    /// defaults when it is unset or unreadable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded board config from {}", path.to_string_lossy());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {err}", path.to_string_lossy());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidValue(
                "history_capacity must be at least 1".to_owned(),
            ));
        }
        if self.eraser.min_radius.is_nan() || self.eraser.min_radius <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "eraser.min_radius must be positive, got {}",
                self.eraser.min_radius
            )));
        }
        if self.eraser.radius_per_width < 0.0 || self.eraser.shape_hit_slop < 0.0 {
            return Err(ConfigError::InvalidValue(
                "eraser radius_per_width and shape_hit_slop must not be negative".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&self.eraser.drop_opacity) {
            return Err(ConfigError::InvalidValue(format!(
                "eraser.drop_opacity must be in [0, 1), got {}",
                self.eraser.drop_opacity
            )));
        }
        let opacity = self.default_settings.opacity;
        if opacity.is_nan() || opacity <= 0.0 || opacity > 1.0 {
            return Err(ConfigError::InvalidValue(format!(
                "default_settings.opacity must be in (0, 1], got {opacity}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BoardConfig::from_json(r#"{ "eraser": { "shape_hit_slop": 35.0 } }"#).unwrap();
        assert_eq!(config.eraser.shape_hit_slop, 35.0);
        assert_eq!(config.eraser.min_radius, EraserConfig::MIN_RADIUS_DEFAULT);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_rejects_zero_history() {
        let err = BoardConfig::from_json(r#"{ "history_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = BoardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("tactics_board_config_{}.json", std::process::id()));
        let config = BoardConfig {
            history_capacity: 5,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = BoardConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BoardConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
