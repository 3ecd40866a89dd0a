//! Per-gesture state machine.
//!
//! Each variant carries exactly the anchor data needed to rebuild the
//! manipulated shape from the live pointer position. Dragging and resizing
//! are recomputed from their gesture-start anchors; rotating advances its
//! anchor after every sample.

use crate::hit_test::{Corner, HitTarget};
use crate::model::{Point, Shape};
use scenekit_core::GestureKind;

/// Geometry of a shape captured when a resize starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl From<&Shape> for AnchorSnapshot {
    fn from(shape: &Shape) -> Self {
        Self {
            x: shape.x,
            y: shape.y,
            width: shape.width,
            height: shape.height,
            angle: shape.angle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position relative to the shape origin at pointer-down.
        offset: Point,
    },
    Resizing {
        anchor: Point,
        snapshot: AnchorSnapshot,
        corner: Corner,
    },
    Rotating {
        /// Pointer angle around the center at the previous sample.
        anchor_angle: f64,
    },
}

impl GestureState {
    /// Enters the gesture that matches what the pointer went down on.
    pub fn begin(target: HitTarget, pointer: Point, shape: &Shape) -> Self {
        match target {
            HitTarget::Body => GestureState::Dragging {
                offset: Point::new(pointer.x - shape.x, pointer.y - shape.y),
            },
            HitTarget::Resize(corner) => GestureState::Resizing {
                anchor: pointer,
                snapshot: AnchorSnapshot::from(shape),
                corner,
            },
            HitTarget::Rotate => GestureState::Rotating {
                anchor_angle: pointer_angle(shape.center(), pointer),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, GestureState::Idle)
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging { .. } => Some(GestureKind::Drag),
            GestureState::Resizing { .. } => Some(GestureKind::Resize),
            GestureState::Rotating { .. } => Some(GestureKind::Rotate),
        }
    }

    /// Computes the new value of `shape` for a pointer move.
    ///
    /// Returns `None` when idle. Rotating also advances its anchor.
    pub fn update(&mut self, shape: &Shape, pointer: Point) -> Option<Shape> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging { offset } => Some(drag(shape, *offset, pointer)),
            GestureState::Resizing {
                anchor,
                snapshot,
                corner,
            } => Some(resize(shape, snapshot, *corner, *anchor, pointer)),
            GestureState::Rotating { anchor_angle } => {
                let (rotated, current) = rotate(shape, *anchor_angle, pointer);
                *anchor_angle = current;
                Some(rotated)
            }
        }
    }
}

/// Angle of `pointer` around `center`, as `atan2(dy, dx)`.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x)
}

/// Moves the shape so its origin sits at `pointer - offset`.
pub fn drag(shape: &Shape, offset: Point, pointer: Point) -> Shape {
    Shape {
        x: pointer.x - offset.x,
        y: pointer.y - offset.y,
        ..shape.clone()
    }
}

/// Rebuilds the box from the snapshot and the pointer travel since `anchor`.
///
/// The travel is rotated into the shape's local frame using the snapshot
/// angle so handles track the pointer on rotated shapes. Sizes are not
/// clamped: dragging a handle past the opposite edge flips the shape.
pub fn resize(
    shape: &Shape,
    snapshot: &AnchorSnapshot,
    corner: Corner,
    anchor: Point,
    pointer: Point,
) -> Shape {
    let dx_raw = pointer.x - anchor.x;
    let dy_raw = pointer.y - anchor.y;
    let (sin, cos) = snapshot.angle.sin_cos();
    let dx = dx_raw * cos + dy_raw * sin;
    let dy = dy_raw * cos - dx_raw * sin;

    let s = snapshot;
    let (x, y, width, height) = match corner {
        Corner::TopLeft => (s.x + dx, s.y + dy, s.width - dx, s.height - dy),
        Corner::TopRight => (s.x, s.y + dy, s.width + dx, s.height - dy),
        Corner::BottomLeft => (s.x + dx, s.y, s.width - dx, s.height + dy),
        Corner::BottomRight => (s.x, s.y, s.width + dx, s.height + dy),
    };

    Shape {
        x,
        y,
        width,
        height,
        ..shape.clone()
    }
}

/// Adds the pointer's angular travel since `anchor_angle` to the shape.
/// Returns the rotated shape and the new anchor angle.
pub fn rotate(shape: &Shape, anchor_angle: f64, pointer: Point) -> (Shape, f64) {
    let current = pointer_angle(shape.center(), pointer);
    let rotated = Shape {
        angle: shape.angle + (current - anchor_angle),
        ..shape.clone()
    };
    (rotated, current)
}
