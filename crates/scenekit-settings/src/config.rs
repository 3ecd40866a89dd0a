//! Configuration and settings management for SceneKit
//!
//! Configuration is organized into logical sections:
//! - Surface size
//! - Handle geometry shared by hit-testing and decorations
//! - Rendering strategy and text font
//! - Export location for snapshots
//!
//! Files are JSON or TOML, chosen by extension.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use scenekit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Drawing surface dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_SURFACE_WIDTH,
            height: constants::DEFAULT_SURFACE_HEIGHT,
        }
    }
}

/// Handle geometry
///
/// The tolerances drive hit-testing; the sizes drive the selection
/// decorations. `rotate_stem_length` is used by both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleSettings {
    pub resize_tolerance: f64,
    pub rotate_stem_length: f64,
    pub rotate_tolerance: f64,
    pub handle_size: f64,
    pub rotate_stem_half_width: f64,
    pub selection_stroke_width: f64,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            resize_tolerance: constants::RESIZE_HANDLE_TOLERANCE,
            rotate_stem_length: constants::ROTATE_STEM_LENGTH,
            rotate_tolerance: constants::ROTATE_HANDLE_TOLERANCE,
            handle_size: constants::HANDLE_SIZE,
            rotate_stem_half_width: constants::ROTATE_STEM_HALF_WIDTH,
            selection_stroke_width: constants::SELECTION_STROKE_WIDTH,
        }
    }
}

/// Repaint strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Repaint one surface from scratch on every change
    SingleSurface,
    /// Static layer plus interaction overlay
    #[default]
    DualSurface,
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleSurface => write!(f, "single-surface"),
            Self::DualSurface => write!(f, "dual-surface"),
        }
    }
}

/// Rendering preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingSettings {
    pub strategy: RenderStrategy,
    /// Text shape font size in pixels
    pub font_size: f64,
    /// Font family for text shapes ("Sans", "Serif", "Monospace" or a name)
    pub font_family: String,
}

impl Default for RenderingSettings {
    fn default() -> Self {
        Self {
            strategy: RenderStrategy::default(),
            font_size: constants::TEXT_FONT_SIZE,
            font_family: "Sans".to_string(),
        }
    }
}

/// Snapshot export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory PNG snapshots are written to
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("snapshots"),
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub surface: SurfaceSettings,
    pub handles: HandleSettings,
    pub rendering: RenderingSettings,
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/scenekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("scenekit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load the config from [`Config::default_path`], falling back to
    /// defaults when the file is missing or unreadable.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                return Self::default();
            }
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface.width == 0 {
            return Err(ConfigError::out_of_range("surface.width", self.surface.width));
        }
        if self.surface.height == 0 {
            return Err(ConfigError::out_of_range(
                "surface.height",
                self.surface.height,
            ));
        }

        let handles = [
            ("handles.resize_tolerance", self.handles.resize_tolerance),
            ("handles.rotate_tolerance", self.handles.rotate_tolerance),
            ("handles.handle_size", self.handles.handle_size),
            ("handles.selection_stroke_width", self.handles.selection_stroke_width),
        ];
        for (key, value) in handles {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        // The stem may be zero (handle on the top edge) but never below it.
        for (key, value) in [
            ("handles.rotate_stem_length", self.handles.rotate_stem_length),
            ("handles.rotate_stem_half_width", self.handles.rotate_stem_half_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if !(self.rendering.font_size.is_finite() && self.rendering.font_size > 0.0) {
            return Err(ConfigError::out_of_range(
                "rendering.font_size",
                self.rendering.font_size,
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
