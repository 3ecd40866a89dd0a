//! Cursor feedback exposed to the hosting UI.

use serde::{Deserialize, Serialize};

/// Pointer cursor the host should display over the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorMode {
    /// Nothing selected.
    #[default]
    Default,
    /// A shape is selected and can be picked up.
    Grab,
    /// A gesture is in progress.
    Grabbing,
}

impl CursorMode {
    /// Derives the cursor from the interaction state.
    pub fn from_state(has_selection: bool, gesture_active: bool) -> Self {
        if gesture_active {
            Self::Grabbing
        } else if has_selection {
            Self::Grab
        } else {
            Self::Default
        }
    }

    /// CSS / GTK style cursor name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

impl std::fmt::Display for CursorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
