//! # SceneKit
//!
//! Interactive 2D scene editor core: pointer hit-testing, drag / resize /
//! rotate gestures and a layered repaint coordinator that keeps full repaints
//! off the pointer-move path.
//!
//! ## Architecture
//!
//! SceneKit is organized as a workspace with multiple crates:
//!
//! 1. **scenekit-core** - Errors, canonical constants, cursor mode, editor events
//! 2. **scenekit-designer** - Shapes, hit-testing, gestures, rendering, repaint strategies
//! 3. **scenekit-settings** - Configuration files and validation
//! 4. **scenekit** - This crate: logging setup, config wiring and the demo binary

pub use scenekit_core::{CursorMode, EditorEvent, Error, EventDispatcher, GestureKind, Result};
pub use scenekit_designer as designer;
pub use scenekit_designer::{
    Canvas, Color, HandleGeometry, MountConfig, RenderStyle, RepaintStats, Shape, ShapeKind,
};
pub use scenekit_settings::{Config, RenderStrategy};

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Loads the editor configuration.
///
/// An explicit `path` must exist and parse; without one the platform config
/// file is used when present. The result is always validated.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let config = Config::load_from_file(path)?;
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        None => Config::load_or_default(),
    };
    config.validate()?;
    Ok(config)
}

/// Hit-test zones from the handle settings.
pub fn handle_geometry(config: &Config) -> HandleGeometry {
    HandleGeometry {
        resize_tolerance: config.handles.resize_tolerance,
        rotate_stem_length: config.handles.rotate_stem_length,
        rotate_tolerance: config.handles.rotate_tolerance,
    }
}

/// Painting style from the handle and rendering settings.
pub fn render_style(config: &Config) -> RenderStyle {
    RenderStyle {
        handle_size: config.handles.handle_size as f32,
        selection_stroke_width: config.handles.selection_stroke_width as f32,
        rotate_stem_length: config.handles.rotate_stem_length as f32,
        rotate_stem_half_width: config.handles.rotate_stem_half_width as f32,
        text: designer::TextStyle {
            family: config.rendering.font_family.clone(),
            size: config.rendering.font_size as f32,
        },
        ..RenderStyle::default()
    }
}

/// Builds an unmounted canvas over `shapes` as `config` describes,
/// using `strategy` for repainting.
pub fn canvas_with_strategy(config: &Config, shapes: Vec<Shape>, strategy: RenderStrategy) -> Canvas {
    let mount = MountConfig::new(shapes).with_size(config.surface.width, config.surface.height);
    let style = render_style(config);
    let canvas = match strategy {
        RenderStrategy::SingleSurface => Canvas::single_surface(mount, style),
        RenderStrategy::DualSurface => Canvas::dual_surface(mount, style),
    };
    canvas.with_geometry(handle_geometry(config))
}

/// Builds an unmounted canvas with the configured strategy.
pub fn canvas_from_config(config: &Config, shapes: Vec<Shape>) -> Canvas {
    canvas_with_strategy(config, shapes, config.rendering.strategy)
}
