//! Integer rectangle geometry with named anchor points.
//!
//! All region math in the panels is done in whole pixels. A `Rect` never
//! validates its input: negative or zero extents are stored as given and simply
//! contain no points.

use serde::{Deserialize, Serialize};

/// A point in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One of the nine anchor points of a rectangle.
///
/// Used both to position a rect (`Rect::set_rect`) and to describe where a
/// point lies relative to one (`Rect::locate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locus {
    UpperLeft,
    Top,
    UpperRight,
    Left,
    Center,
    Right,
    LowerLeft,
    Bottom,
    LowerRight,
}

/// Horizontal or vertical band of a locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Start,
    Middle,
    End,
}

impl Locus {
    fn from_bands(horizontal: Band, vertical: Band) -> Self {
        match (vertical, horizontal) {
            (Band::Start, Band::Start) => Locus::UpperLeft,
            (Band::Start, Band::Middle) => Locus::Top,
            (Band::Start, Band::End) => Locus::UpperRight,
            (Band::Middle, Band::Start) => Locus::Left,
            (Band::Middle, Band::Middle) => Locus::Center,
            (Band::Middle, Band::End) => Locus::Right,
            (Band::End, Band::Start) => Locus::LowerLeft,
            (Band::End, Band::Middle) => Locus::Bottom,
            (Band::End, Band::End) => Locus::LowerRight,
        }
    }

    fn horizontal(self) -> Band {
        match self {
            Locus::UpperLeft | Locus::Left | Locus::LowerLeft => Band::Start,
            Locus::Top | Locus::Center | Locus::Bottom => Band::Middle,
            Locus::UpperRight | Locus::Right | Locus::LowerRight => Band::End,
        }
    }

    fn vertical(self) -> Band {
        match self {
            Locus::UpperLeft | Locus::Top | Locus::UpperRight => Band::Start,
            Locus::Left | Locus::Center | Locus::Right => Band::Middle,
            Locus::LowerLeft | Locus::Bottom | Locus::LowerRight => Band::End,
        }
    }

    /// True for the three loci along the top edge.
    pub fn is_above(self) -> bool {
        self.vertical() == Band::Start
    }

    /// True for the three loci along the bottom edge.
    pub fn is_below(self) -> bool {
        self.vertical() == Band::End
    }
}

/// Single-value accessor selector for `Rect::scalar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Left,
    Top,
    Right,
    Bottom,
    Width,
    Height,
}

/// An axis-aligned rectangle in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rect from its upper-left corner and extent.
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rect of the given size whose `locus` sits at `(x, y)`.
    pub fn anchored(locus: Locus, x: i32, y: i32, width: i32, height: i32) -> Self {
        let mut rect = Self::ZERO;
        rect.set_rect(locus, x, y, width, height);
        rect
    }

    /// Reposition and resize so that the named anchor lands on `(x, y)`.
    pub fn set_rect(&mut self, locus: Locus, x: i32, y: i32, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.left = match locus.horizontal() {
            Band::Start => x,
            Band::Middle => x.saturating_sub(width / 2),
            Band::End => x.saturating_sub(width),
        };
        self.top = match locus.vertical() {
            Band::Start => y,
            Band::Middle => y.saturating_sub(height / 2),
            Band::End => y.saturating_sub(height),
        };
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Center point, rounded toward the upper-left.
    pub fn center(&self) -> Point {
        Point::new(
            self.left.saturating_add(self.width / 2),
            self.top.saturating_add(self.height / 2),
        )
    }

    /// Read one edge or extent.
    pub fn scalar(&self, scalar: Scalar) -> i32 {
        match scalar {
            Scalar::Left => self.left,
            Scalar::Top => self.top,
            Scalar::Right => self.right(),
            Scalar::Bottom => self.bottom(),
            Scalar::Width => self.width,
            Scalar::Height => self.height,
        }
    }

    /// Coordinates of the named anchor.
    pub fn point(&self, locus: Locus) -> Point {
        let x = match locus.horizontal() {
            Band::Start => self.left,
            Band::Middle => self.left + self.width / 2,
            Band::End => self.right(),
        };
        let y = match locus.vertical() {
            Band::Start => self.top,
            Band::Middle => self.top + self.height / 2,
            Band::End => self.bottom(),
        };
        Point::new(x, y)
    }

    /// True when the rect has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }

    /// True when the two rects share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Where `point` lies relative to this rect.
    ///
    /// Returns `Locus::Center` when inside, otherwise the side or corner the
    /// point is beyond. Points on the right or bottom edge count as beyond it.
    pub fn locate(&self, point: Point) -> Locus {
        let horizontal = if point.x < self.left {
            Band::Start
        } else if point.x >= self.right() {
            Band::End
        } else {
            Band::Middle
        };
        let vertical = if point.y < self.top {
            Band::Start
        } else if point.y >= self.bottom() {
            Band::End
        } else {
            Band::Middle
        };
        Locus::from_bands(horizontal, vertical)
    }
}
