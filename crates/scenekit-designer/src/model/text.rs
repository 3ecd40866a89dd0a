use rusttype::{point, OutlineBuilder, Scale};
use tiny_skia::{Path, PathBuilder};

use super::TextStyle;
use crate::font_manager;

/// Feeds glyph contours straight into a tiny-skia path.
struct GlyphOutline(PathBuilder);

impl OutlineBuilder for GlyphOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

/// Glyph outlines of `text`, centered on `(width / 2, height / 2)`.
///
/// Returns `None` for blank text or when no font can be resolved, in which
/// case the shape simply paints nothing.
pub(crate) fn outline(text: &str, width: f32, height: f32, style: &TextStyle) -> Option<Path> {
    if text.trim().is_empty() {
        return None;
    }

    let font = font_manager::get_font_for(&style.family)?;
    let scale = Scale::uniform(style.size);
    let v_metrics = font.v_metrics(scale);

    let advance = font
        .layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);

    let left = width / 2.0 - advance / 2.0;
    // Middle baseline: halfway between ascent and (negative) descent.
    let baseline = height / 2.0 + (v_metrics.ascent + v_metrics.descent) / 2.0;

    let mut builder = GlyphOutline(PathBuilder::new());
    for glyph in font.layout(text, scale, point(left, baseline)) {
        glyph.build_outline(&mut builder);
    }
    builder.0.finish()
}
