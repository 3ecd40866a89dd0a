//! SceneKit Settings Crate
//!
//! Handles editor configuration: surface size, handle geometry, rendering
//! strategy and export location.

pub mod config;
pub mod error;

pub use config::{
    Config, ExportSettings, HandleSettings, RenderStrategy, RenderingSettings, SurfaceSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
