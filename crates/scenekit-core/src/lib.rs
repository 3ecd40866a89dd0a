//! # SceneKit Core
//!
//! Core types shared by every SceneKit crate: the error model, the canonical
//! interaction constants, the cursor feedback enum and the editor event
//! dispatcher used by hosts to observe an editing session.

pub mod constants;
pub mod cursor;
pub mod error;
pub mod event;

pub use cursor::CursorMode;
pub use error::{Error, Result};
pub use event::{EditorEvent, EventDispatcher, GestureKind};
