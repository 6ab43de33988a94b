//! TOML-based application configuration.
//!
//! Stores:
//! - Ring dimensions (radius, stroke width, view-box size)
//! - The reference period the full ring stands for
//! - The default timer length shown on the button
//! - The ordered category palette and the remainder color
//!
//! Configuration is stored at `~/.config/akashic/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::allocation::ReferencePeriod;
use crate::category::{Category, DEFAULT_REMAINDER_COLOR};
use crate::error::{ConfigError, ValidationError};
use crate::ring::RingGeometry;

/// Returns `~/.config/akashic[-dev]/` based on AKASHIC_ENV.
///
/// Set AKASHIC_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("AKASHIC_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("akashic-dev")
    } else {
        base_dir.join("akashic")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// Ring dimensions in view-box units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_view_size")]
    pub view_size: f64,
}

/// Timer button configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/akashic/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_remainder_color")]
    pub remainder_color: String,
    #[serde(default)]
    pub ring: RingConfig,
    #[serde(default)]
    pub period: ReferencePeriod,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default = "Category::default_palette")]
    pub categories: Vec<Category>,
}

fn default_radius() -> f64 {
    45.0
}
fn default_stroke_width() -> f64 {
    8.0
}
fn default_view_size() -> f64 {
    100.0
}
fn default_focus_minutes() -> u32 {
    25
}
fn default_remainder_color() -> String {
    DEFAULT_REMAINDER_COLOR.into()
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            stroke_width: default_stroke_width(),
            view_size: default_view_size(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remainder_color: default_remainder_color(),
            ring: RingConfig::default(),
            period: ReferencePeriod::default(),
            timer: TimerConfig::default(),
            categories: Category::default_palette(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = match current {
                serde_json::Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
        }
        Some(current)
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key
    /// (e.g. `ring.radius`, `categories.0.color`).
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn geometry(&self) -> Result<RingGeometry, ValidationError> {
        RingGeometry::new(self.ring.radius, self.ring.stroke_width)
    }

    /// Categories in legend order, colors validated.
    pub fn categories(&self) -> Result<&[Category], ValidationError> {
        for category in &self.categories {
            category.validate()?;
        }
        Ok(&self.categories)
    }

    pub fn remainder(&self) -> Result<Category, ValidationError> {
        let remainder = Category::remainder_with_color(self.remainder_color.clone());
        remainder.validate()?;
        Ok(remainder)
    }
}
