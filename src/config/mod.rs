// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! gesture tuning to a `settings.toml` file.
//!
//! Every field is optional; anything missing resolves to the constants in
//! [`defaults`]. The runtime configs handed to controllers are validated when
//! resolved, so a bad value surfaces as [`Error::InvalidConfiguration`] before
//! any controller exists.
//!
//! # Examples
//!
//! ```no_run
//! use snapback::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.zoom.max_scale = Some(4.0);
//! config::save(&config).expect("Failed to save config");
//!
//! let zoom = config.zoom_config().expect("valid zoom settings");
//! assert_eq!(zoom.max_scale(), 4.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::onboarding::SlideConfig;
use crate::paths;
use crate::pinch::ZoomConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Persisted gesture settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub zoom: ZoomSection,
    #[serde(default)]
    pub slide: SlideSection,
}

/// `[zoom]` table of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoomSection {
    #[serde(default)]
    pub max_scale: Option<f32>,
    #[serde(default)]
    pub scale_step: Option<f32>,
}

/// `[slide]` table of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideSection {
    #[serde(default)]
    pub handle_width: Option<f32>,
    #[serde(default)]
    pub track_padding: Option<f32>,
}

impl Config {
    /// Resolves the `[zoom]` table into a validated controller config.
    pub fn zoom_config(&self) -> Result<ZoomConfig> {
        ZoomConfig::new(
            self.zoom.max_scale.unwrap_or(DEFAULT_MAX_SCALE),
            self.zoom.scale_step.unwrap_or(DEFAULT_SCALE_STEP),
        )
    }

    /// Resolves the `[slide]` table into a validated controller config.
    pub fn slide_config(&self) -> Result<SlideConfig> {
        SlideConfig::new(
            self.slide.handle_width.unwrap_or(DEFAULT_HANDLE_WIDTH),
            self.slide.track_padding.unwrap_or(DEFAULT_TRACK_PADDING),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
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

pub fn save(config: &Config) -> Result<()> {
    match get_default_config_path() {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings file");
            Ok(Config::default())
        }
    }
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
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            zoom: ZoomSection {
                max_scale: Some(3.0),
                scale_step: Some(0.5),
            },
            slide: SlideSection {
                handle_width: Some(64.0),
                track_padding: None,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_other_sections_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slide]\nhandle_width = 60.0\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.slide.handle_width, Some(60.0));
        assert_eq!(loaded.zoom, ZoomSection::default());
    }

    #[test]
    fn default_config_resolves_to_default_controllers() {
        let config = Config::default();
        let zoom = config.zoom_config().expect("default zoom config is valid");
        assert_eq!(zoom.max_scale(), DEFAULT_MAX_SCALE);
        assert_eq!(zoom.scale_step(), DEFAULT_SCALE_STEP);

        let slide = config.slide_config().expect("default slide config is valid");
        assert_eq!(slide.handle_width(), DEFAULT_HANDLE_WIDTH);
        assert_eq!(slide.track_padding(), DEFAULT_TRACK_PADDING);
    }

    #[test]
    fn out_of_range_zoom_settings_are_rejected() {
        let config = Config {
            zoom: ZoomSection {
                max_scale: Some(0.5),
                scale_step: None,
            },
            ..Config::default()
        };
        assert!(matches!(
            config.zoom_config(),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
