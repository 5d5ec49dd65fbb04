//! Input events delivered to widgets and scroll events raised to the host.

use serde::{Deserialize, Serialize};

use crate::rect::Point;
use crate::timer::TimerHandle;

/// Events the host delivers to a widget.
///
/// Pointer positions are widget-local pixels. Timer deliveries arrive through
/// the same entry point so everything is serialized on the host's loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Primary pointer button pressed.
    Pressed { position: Point },
    /// Primary pointer button released.
    Released { position: Point },
    /// Pointer moved, with or without a button held.
    Moved { position: Point },
    /// Pointer entered the widget and settled (hover).
    CursorEntered,
    /// Pointer left the widget.
    CursorLeft,
    /// Widget was resized by its layout owner.
    Resized { width: i32, height: i32 },
    /// A timer scheduled through `TimerService` came due.
    Timer(TimerHandle),
}

/// Scroll requests raised to the host.
///
/// The host interprets these against its own content model and answers with
/// `ScrollBar::refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollEvent {
    SmallDecrement,
    SmallIncrement,
    LargeDecrement,
    LargeIncrement,
    /// Jump to the start of the content.
    First,
    /// Jump to the end of the content.
    Last,
    /// Thumb drag finished; progress is final.
    ThumbPosition,
    /// Thumb is being dragged; progress is provisional.
    ThumbTrack,
    EndScroll,
}

impl ScrollEvent {
    /// True for the events raised by a thumb drag.
    pub fn is_thumb(self) -> bool {
        matches!(self, ScrollEvent::ThumbPosition | ScrollEvent::ThumbTrack)
    }
}

/// Pointer shape the host should show over the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    /// Track areas that page when clicked.
    #[default]
    Hand,
    /// Over the scroll-to-start extremity.
    PanNorth,
    /// Over the scroll-to-end extremity.
    PanSouth,
    /// Over the draggable thumb.
    ResizeVertical,
    /// Over the vent grip.
    Move,
}
