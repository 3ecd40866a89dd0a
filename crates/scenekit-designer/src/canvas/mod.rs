//! Interactive canvas component.
//!
//! Owns the shape collection, the selection, the gesture state and a
//! repaint strategy. Hosts feed it pointer events and read back the cursor,
//! the repaint counters and the composited surface.

mod input;
mod types;

pub use types::{CanvasPoint, MountConfig, PointerEvent};

use std::path::Path;

use tiny_skia::Pixmap;
use tokio::sync::broadcast;

use crate::compositor::{DualSurface, RepaintStats, RepaintStrategy, SingleSurface};
use crate::gesture::GestureState;
use crate::hit_test::HandleGeometry;
use crate::model::Shape;
use crate::renderer::{self, RenderStyle};
use crate::scene::Scene;
use crate::selection_manager::SelectionManager;
use scenekit_core::{CursorMode, EditorEvent, Error, EventDispatcher, Result};

/// Canvas state managing shapes and pointer interaction.
#[derive(Debug)]
pub struct Canvas {
    scene: Scene,
    selection: SelectionManager,
    gesture: GestureState,
    geometry: HandleGeometry,
    strategy: Box<dyn RepaintStrategy>,
    events: EventDispatcher,
    cursor: CursorMode,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Creates an unmounted canvas over `config.initial_shapes`.
    pub fn new(config: MountConfig, strategy: Box<dyn RepaintStrategy>) -> Self {
        Self {
            scene: Scene::new(config.initial_shapes),
            selection: SelectionManager::new(),
            gesture: GestureState::Idle,
            geometry: HandleGeometry::default(),
            strategy,
            events: EventDispatcher::default(),
            cursor: CursorMode::Default,
            width: config.surface_width,
            height: config.surface_height,
        }
    }

    /// Canvas using the static layer + overlay strategy.
    pub fn dual_surface(config: MountConfig, style: RenderStyle) -> Self {
        Self::new(config, Box::new(DualSurface::new(style)))
    }

    /// Canvas that repaints everything on every change.
    pub fn single_surface(config: MountConfig, style: RenderStyle) -> Self {
        Self::new(config, Box::new(SingleSurface::new(style)))
    }

    pub fn with_geometry(mut self, geometry: HandleGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Allocates the surfaces and paints the scene once.
    pub fn mount(&mut self) -> bool {
        let before = self.strategy.stats().static_repaints;
        let mounted = self.strategy.mount(
            self.width,
            self.height,
            &self.scene,
            self.selection.resolve(&self.scene),
        );
        if mounted {
            tracing::info!(
                "Canvas mounted: {} shapes, {}x{}, {}",
                self.scene.len(),
                self.width,
                self.height,
                self.strategy.name()
            );
            // A gesture begun before mount moves onto the fresh surfaces.
            if self.gesture.is_active() {
                if let Some(index) = self.selection.resolve(&self.scene) {
                    tracing::debug!("Resuming gesture on shape {} after mount", index);
                    self.strategy.gesture_started(&self.scene, index);
                }
            }
            self.publish_repaints(before);
        }
        mounted
    }

    /// Ends any gesture in flight and releases the surfaces.
    pub fn unmount(&mut self) {
        self.finish_gesture();
        self.strategy.unmount();
        self.refresh_cursor();
        tracing::info!("Canvas unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.strategy.is_mounted()
    }

    pub fn cursor(&self) -> CursorMode {
        self.cursor
    }

    /// Number of full static-layer repaints so far.
    pub fn static_render_count(&self) -> u64 {
        self.strategy.stats().static_repaints
    }

    pub fn stats(&self) -> RepaintStats {
        self.strategy.stats()
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn shapes(&self) -> &[Shape] {
        self.scene.as_slice()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn geometry(&self) -> &HandleGeometry {
        &self.geometry
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.events.subscribe()
    }

    /// Everything currently visible, flattened. `None` when unmounted.
    pub fn composite(&self) -> Option<Pixmap> {
        self.strategy.composite()
    }

    /// Saves the composited surface as a PNG.
    pub fn export_png(&self, path: &Path) -> Result<()> {
        let pixmap = self.composite().ok_or(Error::NotMounted)?;
        renderer::save_png(&pixmap, path)
    }

    fn refresh_cursor(&mut self) {
        let cursor =
            CursorMode::from_state(self.selection.has_selection(), self.gesture.is_active());
        if cursor != self.cursor {
            self.cursor = cursor;
            self.events.publish(EditorEvent::CursorChanged(cursor));
        }
    }
}
