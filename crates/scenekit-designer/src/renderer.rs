//! Shape renderer
//! Paints shapes onto tiny-skia pixmaps.
//!
//! Every shape is filled in its local frame through
//! `translate(center) * rotate(angle) * translate(-w/2, -h/2)`, so rotation
//! and flipped (negative) sizes need no special cases. The selected shape
//! additionally gets its decorations in the same frame:
//! - stroked bounding box
//! - a filled square on every corner
//! - a short horizontal bar above the top edge marking the rotate handle

use std::path::Path as FsPath;

use image::RgbaImage;
use tiny_skia::{
    FillRule, Mask, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::model::{Color, Shape, TextStyle};
use crate::scene::Scene;
use scenekit_core::{constants, Error, Result};

/// Sizes and colors used for painting.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Side of the filled corner squares.
    pub handle_size: f32,
    pub selection_stroke_width: f32,
    /// Distance of the rotate bar above the top edge.
    pub rotate_stem_length: f32,
    /// Half the length of the rotate bar.
    pub rotate_stem_half_width: f32,
    pub decoration_color: Color,
    pub text: TextStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            handle_size: constants::HANDLE_SIZE as f32,
            selection_stroke_width: constants::SELECTION_STROKE_WIDTH as f32,
            rotate_stem_length: constants::ROTATE_STEM_LENGTH as f32,
            rotate_stem_half_width: constants::ROTATE_STEM_HALF_WIDTH as f32,
            decoration_color: Color::BLACK,
            text: TextStyle::default(),
        }
    }
}

/// Local frame to surface transform for `shape`.
pub fn shape_transform(shape: &Shape) -> Transform {
    let center = shape.center();
    Transform::from_translate(center.x as f32, center.y as f32)
        .pre_concat(Transform::from_rotate(shape.angle.to_degrees() as f32))
        .pre_translate(-(shape.width / 2.0) as f32, -(shape.height / 2.0) as f32)
}

fn fill_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

/// Fills one shape, optionally clipped by `mask`.
pub fn paint_shape(pixmap: &mut Pixmap, shape: &Shape, style: &RenderStyle, mask: Option<&Mask>) {
    let Some(path) = shape.local_outline(&style.text) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &fill_paint(shape.color),
        FillRule::Winding,
        shape_transform(shape),
        mask,
    );
}

/// Draws the selection decorations of `shape`.
pub fn paint_decorations(pixmap: &mut Pixmap, shape: &Shape, style: &RenderStyle) {
    let transform = shape_transform(shape);
    let paint = fill_paint(style.decoration_color);
    let stroke = Stroke {
        width: style.selection_stroke_width,
        ..Default::default()
    };
    let (w, h) = (shape.width as f32, shape.height as f32);

    // Same edge-by-edge box as the rectangle fill so flipped shapes work.
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(w, 0.0);
    pb.line_to(w, h);
    pb.line_to(0.0, h);
    pb.close();
    if let Some(outline) = pb.finish() {
        pixmap.stroke_path(&outline, &paint, &stroke, transform, None);
    }

    let half = style.handle_size / 2.0;
    let mut pb = PathBuilder::new();
    for (cx, cy) in [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)] {
        if let Some(square) = Rect::from_xywh(cx - half, cy - half, style.handle_size, style.handle_size) {
            pb.push_rect(square);
        }
    }
    if let Some(squares) = pb.finish() {
        pixmap.fill_path(&squares, &paint, FillRule::Winding, transform, None);
    }

    let mut pb = PathBuilder::new();
    pb.move_to(w / 2.0 - style.rotate_stem_half_width, -style.rotate_stem_length);
    pb.line_to(w / 2.0 + style.rotate_stem_half_width, -style.rotate_stem_length);
    if let Some(bar) = pb.finish() {
        pixmap.stroke_path(&bar, &paint, &stroke, transform, None);
    }
}

/// Clears `pixmap` and paints every shape in order, decorating `selected`.
pub fn render_scene(pixmap: &mut Pixmap, scene: &Scene, selected: Option<usize>, style: &RenderStyle) {
    pixmap.fill(tiny_skia::Color::TRANSPARENT);
    for (index, shape) in scene.iter().enumerate() {
        paint_shape(pixmap, shape, style, None);
        if selected == Some(index) {
            paint_decorations(pixmap, shape, style);
        }
    }
}

/// Clears `pixmap` and paints a single shape, with decorations if asked.
pub fn render_single(pixmap: &mut Pixmap, shape: &Shape, decorated: bool, style: &RenderStyle) {
    pixmap.fill(tiny_skia::Color::TRANSPARENT);
    paint_shape(pixmap, shape, style, None);
    if decorated {
        paint_decorations(pixmap, shape, style);
    }
}

/// Surface-space region covered by `shape` and its decorations.
///
/// The local box (widened to the text outline for text shapes) is padded by
/// half a handle plus the stroke width, and the rotate bar gets its own
/// rectangle. One extra pixel absorbs anti-aliasing bleed.
pub fn shape_footprint(shape: &Shape, style: &RenderStyle) -> Option<Path> {
    let (w, h) = (shape.width as f32, shape.height as f32);
    let (mut left, mut right) = (w.min(0.0), w.max(0.0));
    let (mut top, mut bottom) = (h.min(0.0), h.max(0.0));

    if let Some(outline) = shape.local_outline(&style.text) {
        let b = outline.bounds();
        left = left.min(b.left());
        top = top.min(b.top());
        right = right.max(b.right());
        bottom = bottom.max(b.bottom());
    }

    let pad = style.handle_size / 2.0 + style.selection_stroke_width + 1.0;
    let bar_pad = style.selection_stroke_width + 1.0;

    let mut pb = PathBuilder::new();
    if let Some(body) = Rect::from_ltrb(left - pad, top - pad, right + pad, bottom + pad) {
        pb.push_rect(body);
    }
    if let Some(bar) = Rect::from_ltrb(
        w / 2.0 - style.rotate_stem_half_width - bar_pad,
        -style.rotate_stem_length - bar_pad,
        w / 2.0 + style.rotate_stem_half_width + bar_pad,
        -style.rotate_stem_length + bar_pad,
    ) {
        pb.push_rect(bar);
    }
    pb.finish()?.transform(shape_transform(shape))
}

/// Converts a premultiplied pixmap into a straight-alpha RGBA image.
pub fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or_else(|| Error::Image {
        reason: "pixel buffer does not match surface size".to_string(),
    })
}

/// Writes `pixmap` to `path` as a PNG.
pub fn save_png(pixmap: &Pixmap, path: &FsPath) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    to_rgba_image(pixmap)?
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| Error::Image {
            reason: e.to_string(),
        })?;
    tracing::info!("Saved snapshot to {}", path.display());
    Ok(())
}
