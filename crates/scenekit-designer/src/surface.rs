//! Mountable drawing surface.
//!
//! A surface owns its pixmap only while mounted. Every drawing call on an
//! unmounted surface is a silent no-op.

use tiny_skia::{FillRule, Paint, Path, Pixmap, PixmapPaint, Transform};

#[derive(Debug, Clone, Default)]
pub struct Surface {
    pixmap: Option<Pixmap>,
}

impl Surface {
    pub fn unmounted() -> Self {
        Self { pixmap: None }
    }

    /// Allocates a transparent `width` x `height` pixmap.
    ///
    /// Returns `false` (and stays unmounted) for a zero-sized surface.
    pub fn mount(&mut self, width: u32, height: u32) -> bool {
        self.pixmap = Pixmap::new(width, height);
        self.pixmap.is_some()
    }

    pub fn unmount(&mut self) {
        self.pixmap = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.pixmap.is_some()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.pixmap.as_ref().map(|p| (p.width(), p.height()))
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    pub fn pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        self.pixmap.as_mut()
    }

    pub fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(tiny_skia::Color::TRANSPARENT);
        }
    }

    /// Punches `path` out of the surface with destination-out compositing.
    ///
    /// Anti-aliasing is off so every touched pixel becomes fully transparent.
    pub fn erase_path(&mut self, path: &Path) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(tiny_skia::Color::BLACK);
        paint.anti_alias = false;
        paint.blend_mode = tiny_skia::BlendMode::DestinationOut;
        pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Draws `other` over this surface (source-over).
    pub fn draw_over(&mut self, other: &Surface) {
        let (Some(pixmap), Some(top)) = (self.pixmap.as_mut(), other.pixmap.as_ref()) else {
            return;
        };
        pixmap.draw_pixmap(
            0,
            0,
            top.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}
