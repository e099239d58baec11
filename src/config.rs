//! Configuration file handling for scanframe.
//!
//! Loads tunables from `~/.config/scanframe/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::camera::{PreviewSizeSelector, DEFAULT_MAX_PREVIEW_PIXELS, DEFAULT_MIN_PREVIEW_PIXELS};
use crate::framing::FramingBounds;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub framing: FramingBounds,
}

/// Pixel-count window for preview size selection.
#[derive(Debug, Deserialize, PartialEq)]
pub struct PreviewConfig {
    #[serde(default = "default_min_pixels")]
    pub min_pixels: u32,
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            min_pixels: DEFAULT_MIN_PREVIEW_PIXELS,
            max_pixels: DEFAULT_MAX_PREVIEW_PIXELS,
        }
    }
}

fn default_min_pixels() -> u32 {
    DEFAULT_MIN_PREVIEW_PIXELS
}

fn default_max_pixels() -> u32 {
    DEFAULT_MAX_PREVIEW_PIXELS
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    pub fn selector(&self) -> PreviewSizeSelector {
        PreviewSizeSelector::new(self.preview.min_pixels, self.preview.max_pixels)
    }

    pub fn framing_bounds(&self) -> FramingBounds {
        self.framing
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("scanframe").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/scanframe/config.toml")
        })
}
