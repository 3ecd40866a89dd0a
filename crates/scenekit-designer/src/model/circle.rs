use tiny_skia::{Path, PathBuilder};

/// Circle centered in the box, radius `|min(width, height)| / 2`.
pub(crate) fn outline(width: f32, height: f32) -> Option<Path> {
    let radius = width.min(height).abs() / 2.0;
    PathBuilder::from_circle(width / 2.0, height / 2.0, radius)
}
