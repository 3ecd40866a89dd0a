//! Canvas type definitions: CanvasPoint, MountConfig, PointerEvent.

use crate::model::{Point, Shape};
use scenekit_core::constants;

/// Surface-relative pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to a model point.
    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for CanvasPoint {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for CanvasPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// What the host hands the canvas when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct MountConfig {
    pub initial_shapes: Vec<Shape>,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl MountConfig {
    pub fn new(initial_shapes: Vec<Shape>) -> Self {
        Self {
            initial_shapes,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            initial_shapes: Vec::new(),
            surface_width: constants::DEFAULT_SURFACE_WIDTH,
            surface_height: constants::DEFAULT_SURFACE_HEIGHT,
        }
    }
}

/// Pointer input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(CanvasPoint),
    Move(CanvasPoint),
    Up,
    Leave,
}
