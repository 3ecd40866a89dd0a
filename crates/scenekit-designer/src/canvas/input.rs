//! Pointer input handling.
//!
//! Pointer-down classifies the position and starts a gesture, pointer-move
//! feeds the active gesture, pointer-up and pointer-leave end it. Painting
//! is delegated to the repaint strategy.

use super::types::{CanvasPoint, PointerEvent};
use super::Canvas;
use crate::gesture::GestureState;
use crate::hit_test;
use scenekit_core::EditorEvent;

impl Canvas {
    /// Dispatches one pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, position: impl Into<CanvasPoint>) {
        let pointer = position.into().to_point();

        // A missed pointer-up still ends the previous gesture cleanly.
        if self.gesture.is_active() {
            self.finish_gesture();
        }

        let before = self.strategy.stats().static_repaints;
        match hit_test::hit_scene(&self.scene, pointer, &self.geometry) {
            Some(hit) => {
                let Some(shape) = self.scene.get(hit.index) else {
                    return;
                };
                self.gesture = GestureState::begin(hit.target, pointer, shape);

                if self.selection.select(hit.index, &self.scene) {
                    tracing::debug!("Selected shape {}", hit.index);
                    self.events
                        .publish(EditorEvent::SelectionChanged(Some(hit.index)));
                }
                if let Some(kind) = self.gesture.kind() {
                    tracing::debug!("Begin {} on shape {} ({:?})", kind, hit.index, hit.target);
                    self.events.publish(EditorEvent::GestureStarted {
                        kind,
                        index: hit.index,
                    });
                }
                self.strategy.gesture_started(&self.scene, hit.index);
            }
            None => {
                if self.selection.clear() {
                    tracing::debug!("Selection cleared");
                    self.events.publish(EditorEvent::SelectionChanged(None));
                    self.strategy.selection_changed(&self.scene, None);
                }
            }
        }
        self.publish_repaints(before);
        self.refresh_cursor();
    }

    pub fn pointer_move(&mut self, position: impl Into<CanvasPoint>) {
        if !self.gesture.is_active() {
            return;
        }
        let pointer = position.into().to_point();

        let Some(index) = self.selection.resolve(&self.scene) else {
            return;
        };
        let Some(shape) = self.scene.get(index) else {
            return;
        };
        if let Some(updated) = self.gesture.update(shape, pointer) {
            tracing::trace!(
                "Shape {} -> ({:.1}, {:.1}) {:.1}x{:.1} @ {:.3} rad",
                index,
                updated.x,
                updated.y,
                updated.width,
                updated.height,
                updated.angle
            );
            self.scene.replace(index, updated);
            self.strategy.gesture_moved(&self.scene, index);
        }
    }

    pub fn pointer_up(&mut self) {
        self.finish_gesture();
    }

    /// Leaving the surface cancels the gesture the same way pointer-up does.
    pub fn pointer_leave(&mut self) {
        self.finish_gesture();
    }

    pub(super) fn finish_gesture(&mut self) {
        let Some(kind) = self.gesture.kind() else {
            return;
        };
        self.gesture = GestureState::Idle;

        let before = self.strategy.stats().static_repaints;
        let selected = self.selection.resolve(&self.scene);
        self.strategy.gesture_ended(&self.scene, selected);

        if let Some(index) = selected {
            tracing::debug!("End {} on shape {}", kind, index);
            self.events
                .publish(EditorEvent::GestureEnded { kind, index });
        }
        self.publish_repaints(before);
        self.refresh_cursor();
    }

    pub(super) fn publish_repaints(&self, before: u64) {
        let count = self.strategy.stats().static_repaints;
        if count > before {
            self.events
                .publish(EditorEvent::StaticLayerRepainted { count });
        }
    }
}
