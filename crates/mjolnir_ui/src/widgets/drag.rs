//! Thumb drag session.

use crate::rect::{Locus, Point, Rect};

/// Result of following the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMove {
    /// New thumb rect.
    pub rect: Rect,
    /// Thumb top relative to the track top, clamped to `[0, track height]`.
    pub offset: i32,
}

/// State captured when the pointer grabs the thumb.
///
/// Holds the distance between the pointer and the thumb's upper-left corner,
/// so the thumb keeps its grip point under the pointer while moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    grip_offset: Point,
    origin: Rect,
}

impl DragSession {
    /// Start dragging `guest` from pointer position `pointer`.
    pub fn begin(guest: Rect, pointer: Point) -> Self {
        let anchor = guest.point(Locus::UpperLeft);
        Self {
            grip_offset: Point::new(
                anchor.x.saturating_sub(pointer.x),
                anchor.y.saturating_sub(pointer.y),
            ),
            origin: guest,
        }
    }

    /// Thumb rect at the moment the drag began.
    pub fn origin(&self) -> Rect {
        self.origin
    }

    /// Follow the pointer inside `track`, keeping `guest`'s size and the
    /// track's horizontal placement.
    pub fn follow(&self, pointer: Point, track: Rect, guest: Rect) -> DragMove {
        let target_top = pointer.y.saturating_add(self.grip_offset.y);
        let offset = target_top.saturating_sub(track.top).clamp(0, track.height.max(0));
        let rect = Rect::anchored(
            Locus::UpperLeft,
            track.left,
            track.top.saturating_add(offset),
            guest.width,
            guest.height,
        );
        DragMove { rect, offset }
    }
}
