//! Canonical interaction and rendering constants.
//!
//! Hit-testing and the selection decorations must agree on these values: the
//! rotate handle is hit exactly where its stem is drawn.

/// Half-width of the square zone around each corner that grabs a resize handle.
pub const RESIZE_HANDLE_TOLERANCE: f64 = 8.0;

/// Distance of the rotate handle above the top edge, in the local frame.
pub const ROTATE_STEM_LENGTH: f64 = 30.0;

/// Half-width of the square zone that grabs the rotate handle.
pub const ROTATE_HANDLE_TOLERANCE: f64 = 10.0;

/// Side length of the filled squares drawn on each corner of a selected shape.
pub const HANDLE_SIZE: f64 = 10.0;

/// Half the length of the horizontal rotate stem indicator.
pub const ROTATE_STEM_HALF_WIDTH: f64 = 10.0;

/// Stroke width of the selection bounding box.
pub const SELECTION_STROKE_WIDTH: f64 = 1.5;

/// Font size used for text shapes, in pixels.
pub const TEXT_FONT_SIZE: f64 = 16.0;

/// Default drawing surface width in pixels.
pub const DEFAULT_SURFACE_WIDTH: u32 = 600;

/// Default drawing surface height in pixels.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 400;

/// Capacity of the editor event broadcast channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;
