use tiny_skia::{Path, PathBuilder};

/// Apex at the middle of the top edge, base along the bottom edge.
pub(crate) fn outline(width: f32, height: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(width / 2.0, 0.0);
    pb.line_to(width, height);
    pb.line_to(0.0, height);
    pb.close();
    pb.finish()
}
