//! # SceneKit Designer
//!
//! Interactive 2D scene editing: shapes are picked, dragged, resized and
//! rotated with the pointer and painted onto tiny-skia surfaces.
//!
//! ## Core Components
//!
//! - **Model**: rectangles, circles, triangles, stars and text, stored as an
//!   unrotated box plus a rotation about its center
//! - **Hit testing**: body, corner resize handles and the rotate handle, all
//!   evaluated in the shape's unrotated frame
//! - **Gestures**: an explicit state machine carrying only the anchor data
//!   each gesture needs
//! - **Rendering**: per-shape local-frame painting with selection decorations
//! - **Repaint strategies**: a naive single surface, or a static layer with an
//!   interaction overlay that avoids full repaints while a gesture runs
//!
//! ## Architecture
//!
//! ```text
//! Canvas (pointer input, cursor, events)
//!   ├── Scene (ordered shapes)
//!   ├── SelectionManager
//!   ├── GestureState
//!   └── RepaintStrategy
//!         ├── SingleSurface
//!         └── DualSurface (static layer + overlay)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scenekit_designer::{templates, Canvas, MountConfig, RenderStyle};
//!
//! let mut canvas = Canvas::dual_surface(
//!     MountConfig::new(templates::default_scene()),
//!     RenderStyle::default(),
//! );
//! canvas.mount();
//!
//! canvas.pointer_down((150.0, 150.0));
//! canvas.pointer_move((200.0, 180.0));
//! canvas.pointer_up();
//!
//! assert_eq!(canvas.static_render_count(), 2);
//! ```

pub mod canvas;
pub mod compositor;
pub mod font_manager;
pub mod gesture;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod selection_manager;
pub mod surface;
pub mod templates;

pub use canvas::{Canvas, CanvasPoint, MountConfig, PointerEvent};
pub use compositor::{DualSurface, RepaintStats, RepaintStrategy, SingleSurface};
pub use gesture::{AnchorSnapshot, GestureState};
pub use hit_test::{Corner, HandleGeometry, Hit, HitTarget};
pub use model::{Color, Point, Shape, ShapeKind, TextStyle};
pub use renderer::RenderStyle;
pub use scene::Scene;
pub use selection_manager::SelectionManager;
pub use surface::Surface;
