use tiny_skia::{Path, PathBuilder};

const POINTS: usize = 5;

/// Five-pointed star centered in the box, first point straight up.
///
/// Outer radius is `min(width, height) / 2`, inner radius half of that;
/// vertices alternate every 36 degrees starting at -90 degrees.
pub(crate) fn outline(width: f32, height: f32) -> Option<Path> {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let outer = width.min(height) / 2.0;
    let inner = outer / 2.0;
    let step = std::f32::consts::PI / POINTS as f32;

    let mut pb = PathBuilder::new();
    for i in 0..POINTS * 2 {
        let radius = if i % 2 == 0 { outer } else { inner };
        let theta = -std::f32::consts::FRAC_PI_2 + step * i as f32;
        let (x, y) = (cx + radius * theta.cos(), cy + radius * theta.sin());
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    pb.close();
    pb.finish()
}
