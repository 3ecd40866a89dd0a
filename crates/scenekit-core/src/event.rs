//! Editor event system
//!
//! Provides:
//! - Event types for cursor, selection, gesture and repaint changes
//! - Event dispatcher for publishing events to subscribers
//!
//! Publishing never blocks and works without an async runtime, so it can be
//! called from inside pointer handlers.

use crate::constants::EVENT_CHANNEL_CAPACITY;
use crate::cursor::CursorMode;
use tokio::sync::broadcast;

/// Kind of an active pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Drag,
    Resize,
    Rotate,
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureKind::Drag => write!(f, "drag"),
            GestureKind::Resize => write!(f, "resize"),
            GestureKind::Rotate => write!(f, "rotate"),
        }
    }
}

/// Editor event types
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The cursor the host should display changed
    CursorChanged(CursorMode),
    /// The selected shape index changed
    SelectionChanged(Option<usize>),
    /// A gesture began on the shape at `index`
    GestureStarted {
        /// Which gesture started.
        kind: GestureKind,
        /// Index of the manipulated shape.
        index: usize,
    },
    /// The active gesture ended and its result was committed
    GestureEnded {
        /// Which gesture ended.
        kind: GestureKind,
        /// Index of the manipulated shape.
        index: usize,
    },
    /// The static layer was fully repainted
    StaticLayerRepainted {
        /// Total full repaints so far.
        count: u64,
    },
}

impl std::fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorEvent::CursorChanged(cursor) => write!(f, "Cursor: {}", cursor),
            EditorEvent::SelectionChanged(Some(index)) => write!(f, "Selected shape {}", index),
            EditorEvent::SelectionChanged(None) => write!(f, "Selection cleared"),
            EditorEvent::GestureStarted { kind, index } => {
                write!(f, "Started {} on shape {}", kind, index)
            }
            EditorEvent::GestureEnded { kind, index } => {
                write!(f, "Ended {} on shape {}", kind, index)
            }
            EditorEvent::StaticLayerRepainted { count } => {
                write!(f, "Static layer repaint #{}", count)
            }
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for editor events.
    tx: broadcast::Sender<EditorEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Number of events a slow subscriber may lag behind
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers.
    ///
    /// Returns the number of subscribers that received it. Having no
    /// subscribers is not an error.
    pub fn publish(&self, event: EditorEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(EVENT_CHANNEL_CAPACITY)
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
