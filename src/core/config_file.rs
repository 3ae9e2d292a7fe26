//! User configuration file handling
//!
//! Manages settings from ~/.config/bezy/geometry.json

use crate::editing::{LineCap, LineJoin};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/bezy/geometry.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplify_tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chaikin_iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catmull_rom_tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gaussian_radius: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gaussian_sigma: Option<f64>,
    /// Corner threshold in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_cap: Option<LineCap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_join: Option<LineJoin>,
}

impl ConfigFile {
    /// Get the path to the bezy config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("bezy")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("geometry.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; a missing or unreadable file is `None`
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded geometry settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved geometry settings to {:?}", path);
        Ok(())
    }

    /// A config with every value spelled out, as written by `--new-config`
    pub fn example() -> Self {
        let defaults = crate::core::settings::GeometrySettings::default();
        Self {
            simplify_tolerance: Some(defaults.simplify_tolerance),
            chaikin_iterations: Some(defaults.chaikin_iterations),
            catmull_rom_tension: Some(defaults.catmull_rom_tension),
            gaussian_radius: Some(defaults.gaussian_radius),
            gaussian_sigma: Some(defaults.gaussian_sigma),
            corner_threshold: Some(defaults.corner_threshold),
            stroke_width: Some(defaults.stroke_width),
            line_cap: Some(defaults.line_cap),
            line_join: Some(defaults.line_join),
        }
    }

    /// Create ~/.config/bezy with a geometry.json and a logs directory
    ///
    /// An existing geometry.json is left alone.
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("geometry.json");
        if !settings_path.exists() {
            Self::example().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View logs in: {:?}", logs_dir);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("geometry.json");
        let config = ConfigFile {
            stroke_width: Some(12.0),
            line_join: Some(LineJoin::Miter),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(ConfigFile::load_from(&path), Some(config));
    }

    #[test]
    fn test_missing_and_invalid_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geometry.json");
        assert_eq!(ConfigFile::load_from(&path), None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ConfigFile::load_from(&path), None);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geometry.json");
        fs::write(&path, r#"{ "corner_threshold": 30.0, "line_cap": "square" }"#).unwrap();
        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.corner_threshold, Some(30.0));
        assert_eq!(config.line_cap, Some(LineCap::Square));
        assert_eq!(config.stroke_width, None);
    }

    #[test]
    fn test_initialize_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        ConfigFile::initialize_in(dir.path()).unwrap();
        let path = dir.path().join("geometry.json");
        let written = ConfigFile::load_from(&path).unwrap();
        assert_eq!(written.stroke_width, Some(20.0));
        assert_eq!(written.line_join, Some(LineJoin::Bevel));
        assert!(dir.path().join("logs").is_dir());

        let custom = ConfigFile {
            simplify_tolerance: Some(9.0),
            ..Default::default()
        };
        custom.save_to(&path).unwrap();
        ConfigFile::initialize_in(dir.path()).unwrap();
        assert_eq!(ConfigFile::load_from(&path), Some(custom));
    }
}
