//! Repaint strategies.
//!
//! The canvas reports interaction milestones to a [`RepaintStrategy`] and
//! never paints by itself. Two strategies are provided:
//!
//! - [`SingleSurface`] repaints the whole scene on every change.
//! - [`DualSurface`] keeps a static layer and an overlay. When a gesture
//!   starts the manipulated shape is erased from the static layer and drawn on
//!   the overlay; pointer moves touch the overlay only; the gesture end
//!   repaints the static layer once and clears the overlay.
//!
//! Layer ownership: at rest the static layer alone shows the scene. During a
//! gesture the manipulated shape belongs to the overlay and every other
//! shape to the static layer.

use tiny_skia::{FillRule, Mask, Path, Pixmap, Rect, Transform};

use crate::renderer::{self, RenderStyle};
use crate::scene::Scene;
use crate::surface::Surface;

/// Full-surface repaint counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepaintStats {
    /// Full repaints of the static (or only) surface.
    pub static_repaints: u64,
    /// Redraws of the overlay surface.
    pub overlay_repaints: u64,
}

pub trait RepaintStrategy: std::fmt::Debug + Send {
    fn name(&self) -> &'static str;

    /// Allocates surfaces and paints the initial scene. Returns `false` if
    /// the surfaces could not be allocated.
    fn mount(&mut self, width: u32, height: u32, scene: &Scene, selected: Option<usize>) -> bool;

    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    /// The shape at `index` was grabbed and is now selected.
    fn gesture_started(&mut self, scene: &Scene, index: usize);

    /// The shape at `index` changed during the gesture.
    fn gesture_moved(&mut self, scene: &Scene, index: usize);

    /// The gesture finished; `scene` is authoritative again.
    fn gesture_ended(&mut self, scene: &Scene, selected: Option<usize>);

    /// The selection changed outside of a gesture.
    fn selection_changed(&mut self, scene: &Scene, selected: Option<usize>);

    fn stats(&self) -> RepaintStats;

    /// Flattened view of every surface, or `None` when unmounted.
    fn composite(&self) -> Option<Pixmap>;
}

/// Naive strategy: one surface, repainted from scratch on every change.
#[derive(Debug, Default)]
pub struct SingleSurface {
    surface: Surface,
    style: RenderStyle,
    stats: RepaintStats,
}

impl SingleSurface {
    pub fn new(style: RenderStyle) -> Self {
        Self {
            surface: Surface::unmounted(),
            style,
            stats: RepaintStats::default(),
        }
    }

    fn repaint(&mut self, scene: &Scene, selected: Option<usize>) {
        let Some(pixmap) = self.surface.pixmap_mut() else {
            tracing::warn!("Repaint skipped: surface not mounted");
            return;
        };
        renderer::render_scene(pixmap, scene, selected, &self.style);
        self.stats.static_repaints += 1;
        tracing::trace!("Full repaint #{}", self.stats.static_repaints);
    }
}

impl RepaintStrategy for SingleSurface {
    fn name(&self) -> &'static str {
        "single-surface"
    }

    fn mount(&mut self, width: u32, height: u32, scene: &Scene, selected: Option<usize>) -> bool {
        if !self.surface.mount(width, height) {
            tracing::warn!("Cannot mount {}x{} surface", width, height);
            return false;
        }
        tracing::info!("Mounted single surface {}x{}", width, height);
        self.repaint(scene, selected);
        true
    }

    fn unmount(&mut self) {
        self.surface.unmount();
        tracing::info!("Unmounted single surface");
    }

    fn is_mounted(&self) -> bool {
        self.surface.is_mounted()
    }

    fn gesture_started(&mut self, scene: &Scene, index: usize) {
        self.repaint(scene, Some(index));
    }

    fn gesture_moved(&mut self, scene: &Scene, index: usize) {
        self.repaint(scene, Some(index));
    }

    fn gesture_ended(&mut self, _scene: &Scene, _selected: Option<usize>) {
        // The last move already painted the final state.
    }

    fn selection_changed(&mut self, scene: &Scene, selected: Option<usize>) {
        self.repaint(scene, selected);
    }

    fn stats(&self) -> RepaintStats {
        self.stats
    }

    fn composite(&self) -> Option<Pixmap> {
        self.surface.pixmap().cloned()
    }
}

/// Static layer plus interaction overlay.
#[derive(Debug, Default)]
pub struct DualSurface {
    static_layer: Surface,
    overlay: Surface,
    style: RenderStyle,
    stats: RepaintStats,
    /// Shape currently owned by the overlay.
    interacting: Option<usize>,
    /// Shape whose decorations the static layer currently shows.
    static_selection: Option<usize>,
}

impl DualSurface {
    pub fn new(style: RenderStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn interacting(&self) -> Option<usize> {
        self.interacting
    }

    pub fn static_layer(&self) -> &Surface {
        &self.static_layer
    }

    pub fn overlay(&self) -> &Surface {
        &self.overlay
    }

    fn repaint_static(&mut self, scene: &Scene, selected: Option<usize>) {
        let Some(pixmap) = self.static_layer.pixmap_mut() else {
            tracing::warn!("Static repaint skipped: surface not mounted");
            return;
        };
        renderer::render_scene(pixmap, scene, selected, &self.style);
        self.static_selection = selected;
        self.stats.static_repaints += 1;
        tracing::debug!("Static layer repaint #{}", self.stats.static_repaints);
    }

    fn redraw_overlay(&mut self, scene: &Scene, index: usize) {
        let (Some(pixmap), Some(shape)) = (self.overlay.pixmap_mut(), scene.get(index)) else {
            return;
        };
        renderer::render_single(pixmap, shape, true, &self.style);
        self.stats.overlay_repaints += 1;
    }

    /// Erases `region` from the static layer, then repaints every shape
    /// except `exclude` that overlaps it, clipped to the region.
    fn erase_and_repair(&mut self, region: &Path, scene: &Scene, exclude: usize) {
        self.static_layer.erase_path(region);

        let style = &self.style;
        let Some(pixmap) = self.static_layer.pixmap_mut() else {
            return;
        };
        let Some(mut mask) = Mask::new(pixmap.width(), pixmap.height()) else {
            return;
        };
        mask.fill_path(region, FillRule::Winding, false, Transform::identity());

        let area = region.bounds();
        let mut repaired = 0usize;
        for (index, shape) in scene.iter().enumerate() {
            if index == exclude {
                continue;
            }
            let overlaps = renderer::shape_footprint(shape, style)
                .map(|fp| intersects(&area, &fp.bounds()))
                .unwrap_or(false);
            if overlaps {
                renderer::paint_shape(pixmap, shape, style, Some(&mask));
                repaired += 1;
            }
        }
        tracing::trace!("Repaired {} shape(s) under erased footprint", repaired);
    }
}

fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

impl RepaintStrategy for DualSurface {
    fn name(&self) -> &'static str {
        "dual-surface"
    }

    fn mount(&mut self, width: u32, height: u32, scene: &Scene, selected: Option<usize>) -> bool {
        if !(self.static_layer.mount(width, height) && self.overlay.mount(width, height)) {
            tracing::warn!("Cannot mount {}x{} layers", width, height);
            self.unmount();
            return false;
        }
        tracing::info!("Mounted static and overlay layers {}x{}", width, height);
        self.interacting = None;
        self.repaint_static(scene, selected);
        true
    }

    fn unmount(&mut self) {
        self.static_layer.unmount();
        self.overlay.unmount();
        self.interacting = None;
        self.static_selection = None;
        tracing::info!("Unmounted static and overlay layers");
    }

    fn is_mounted(&self) -> bool {
        self.static_layer.is_mounted() && self.overlay.is_mounted()
    }

    fn gesture_started(&mut self, scene: &Scene, index: usize) {
        if !self.is_mounted() {
            return;
        }
        let Some(shape) = scene.get(index) else {
            tracing::warn!("Gesture on missing shape {} ignored", index);
            return;
        };

        // Drop the previous selection's decorations from the static layer.
        if let Some(previous) = self.static_selection.take().filter(|&p| p != index) {
            if let Some(region) = scene
                .get(previous)
                .and_then(|s| renderer::shape_footprint(s, &self.style))
            {
                self.erase_and_repair(&region, scene, index);
            }
        }

        if let Some(region) = renderer::shape_footprint(shape, &self.style) {
            self.erase_and_repair(&region, scene, index);
        }
        self.interacting = Some(index);
        self.redraw_overlay(scene, index);
        tracing::debug!("Shape {} moved to overlay", index);
    }

    fn gesture_moved(&mut self, scene: &Scene, index: usize) {
        if !self.is_mounted() {
            return;
        }
        if self.interacting != Some(index) {
            tracing::warn!("Overlay redraw for shape {} outside its gesture ignored", index);
            return;
        }
        self.redraw_overlay(scene, index);
        tracing::trace!("Overlay redraw #{}", self.stats.overlay_repaints);
    }

    fn gesture_ended(&mut self, scene: &Scene, selected: Option<usize>) {
        let Some(index) = self.interacting.take() else {
            return;
        };
        self.repaint_static(scene, selected);
        self.overlay.clear();
        tracing::debug!("Committed shape {} to static layer", index);
    }

    fn selection_changed(&mut self, scene: &Scene, selected: Option<usize>) {
        if self.interacting.is_some() || selected == self.static_selection {
            return;
        }
        self.repaint_static(scene, selected);
    }

    fn stats(&self) -> RepaintStats {
        self.stats
    }

    fn composite(&self) -> Option<Pixmap> {
        let mut flat = self.static_layer.clone();
        // At rest the overlay is empty and the static layer is the scene.
        if self.interacting.is_some() {
            flat.draw_over(&self.overlay);
        }
        flat.pixmap().cloned()
    }
}
