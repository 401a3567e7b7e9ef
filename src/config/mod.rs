// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! Unknown or invalid files fall back to defaults rather than failing
//! startup; the gallery must come up even with a broken config.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

pub const DEFAULT_GRID_COLUMNS: u16 = 4;
pub const MIN_GRID_COLUMNS: u16 = 2;
pub const MAX_GRID_COLUMNS: u16 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Whether the staggered entrance animation plays. Defaults to on.
    #[serde(default)]
    pub reveal_animation: Option<bool>,
    /// Number of thumbnail columns in the grid.
    #[serde(default)]
    pub grid_columns: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
            reveal_animation: Some(true),
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
        }
    }
}

/// Clamps a configured column count into the supported range so persisted
/// configs cannot request unusable layouts.
#[must_use]
pub fn clamp_grid_columns(value: u16) -> u16 {
    value.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
            reveal_animation: Some(false),
            grid_columns: Some(6),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.theme_mode, config.theme_mode);
        assert_eq!(loaded.reveal_animation, config.reveal_animation);
        assert_eq!(loaded.grid_columns, config.grid_columns);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is [not valid toml").unwrap();

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded.theme_mode, ThemeMode::System);
        assert_eq!(loaded.grid_columns, Some(DEFAULT_GRID_COLUMNS));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"fr\"\n").unwrap();

        let loaded = load_from_path(&config_path).expect("load failed");
        assert_eq!(loaded.language, Some("fr".to_string()));
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn clamp_grid_columns_enforces_range() {
        assert_eq!(clamp_grid_columns(0), MIN_GRID_COLUMNS);
        assert_eq!(clamp_grid_columns(4), 4);
        assert_eq!(clamp_grid_columns(40), MAX_GRID_COLUMNS);
    }
}
