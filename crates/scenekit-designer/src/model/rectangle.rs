use tiny_skia::{Path, PathBuilder};

/// Axis-aligned box `(0, 0, width, height)`.
///
/// Built edge by edge rather than through `Rect` so a negative size
/// produces the mirrored box instead of nothing.
pub(crate) fn outline(width: f32, height: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(width, 0.0);
    pb.line_to(width, height);
    pb.line_to(0.0, height);
    pb.close();
    pb.finish()
}
