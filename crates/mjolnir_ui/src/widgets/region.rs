//! Interactive regions of the scrollbar.
//!
//! Every region is the same struct tagged with a `RegionKind`; paint and color
//! rules are picked by matching on the kind.

use serde::{Deserialize, Serialize};

use crate::constants::{DOT_DIVISOR, GRIP_DIVISOR, GRIP_MIN_WIDTH_INCHES, PILL_DIVISOR, VENT_DIVISOR};
use crate::rect::{Locus, Point, Rect};
use crate::renderer::{Color, Surface};
use crate::theme::Theme;
use crate::units::Dpi;

/// The fixed set of regions a scrollbar is made of, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Scroll-to-start button.
    Up,
    /// Scroll-to-end button.
    Down,
    /// Track the thumb moves in.
    Middle,
    /// Ghost of the thumb where a press started.
    Shadow,
    /// Draggable thumb.
    Thumb,
    /// Optional grip strip above the Up button.
    Vent,
}

impl RegionKind {
    /// All kinds in paint order.
    pub const ALL: [RegionKind; 6] = [
        RegionKind::Up,
        RegionKind::Down,
        RegionKind::Middle,
        RegionKind::Shadow,
        RegionKind::Thumb,
        RegionKind::Vent,
    ];

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            RegionKind::Up => 0,
            RegionKind::Down => 1,
            RegionKind::Middle => 2,
            RegionKind::Shadow => 3,
            RegionKind::Thumb => 4,
            RegionKind::Vent => 5,
        }
    }
}

/// Theming hint shared by all regions of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Active,
    Focused,
    #[default]
    Inactive,
}

/// A rectangle with hover and visibility state.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    kind: RegionKind,
    rect: Rect,
    visibility: Visibility,
    hidden: bool,
    hovering: bool,
}

impl Region {
    pub fn new(kind: RegionKind) -> Self {
        Self {
            kind,
            rect: Rect::ZERO,
            visibility: Visibility::default(),
            hidden: false,
            hovering: false,
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Hidden regions are not painted and give no hover feedback, but keep
    /// their rect for layout and hit-testing.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        if hidden {
            self.hovering = false;
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Recompute the hover flag for a pointer at `point`.
    ///
    /// Returns `true` when the flag flipped.
    pub fn hover_update(&mut self, point: Point) -> bool {
        let inside = !self.hidden && self.rect.contains(point);
        let changed = inside != self.hovering;
        self.hovering = inside;
        changed
    }

    /// Clear the hover flag. Returns `true` when it was set.
    pub fn hover_stop(&mut self) -> bool {
        std::mem::replace(&mut self.hovering, false)
    }

    /// Color for the region's main mark.
    ///
    /// Hovering always wins; otherwise only an inactive panel dims the region.
    pub fn base_color(&self, theme: &Theme) -> Color {
        if self.kind == RegionKind::Shadow {
            return theme.shadow;
        }
        if self.hovering {
            return theme.active;
        }
        if self.visibility == Visibility::Inactive {
            return theme.inactive;
        }
        theme.active
    }

    pub fn paint(&self, surface: &mut dyn Surface, theme: &Theme, dpi: Dpi) {
        if self.hidden {
            return;
        }
        match self.kind {
            RegionKind::Up | RegionKind::Down => self.paint_extremity(surface, theme, dpi),
            RegionKind::Vent => self.paint_vent(surface, theme, dpi),
            // The track is just the widget background
            RegionKind::Middle => {}
            RegionKind::Shadow => self.paint_pill(surface, theme, dpi),
            RegionKind::Thumb => {
                self.paint_pill(surface, theme, dpi);
                self.paint_grip(surface, theme, dpi);
            }
        }
    }

    fn paint_extremity(&self, surface: &mut dyn Surface, theme: &Theme, dpi: Dpi) {
        let center = self.rect.center();
        let dot = Rect::anchored(
            Locus::Center,
            center.x,
            center.y,
            dpi.divide_x(DOT_DIVISOR),
            dpi.divide_y(DOT_DIVISOR),
        );
        surface.fill_ellipse(dot, self.base_color(theme));
    }

    fn paint_vent(&self, surface: &mut dyn Surface, theme: &Theme, dpi: Dpi) {
        if self.rect.is_empty() {
            return;
        }
        let center = self.rect.center();
        let mark = Rect::anchored(
            Locus::Center,
            center.x,
            center.y,
            dpi.divide_x(VENT_DIVISOR),
            dpi.divide_y(VENT_DIVISOR),
        );
        surface.fill_rect(mark, self.base_color(theme));
    }

    /// Rounded bar: two end discs joined by a rectangle.
    fn paint_pill(&self, surface: &mut dyn Surface, theme: &Theme, dpi: Dpi) {
        let mut width = self.rect.width;
        if width >= dpi.scale_x(GRIP_MIN_WIDTH_INCHES) {
            width = dpi.divide_x(PILL_DIVISOR);
        }
        let left = self.rect.left + (self.rect.width - width) / 2 + 1;
        let whole = Rect::new(left, self.rect.top, width - 1, self.rect.height);
        if whole.is_empty() {
            return;
        }

        let top_cap = Rect::new(whole.left, whole.top, whole.width, whole.width);
        let bottom_cap = Rect::anchored(
            Locus::LowerLeft,
            whole.left,
            whole.bottom(),
            whole.width,
            whole.width,
        );
        let top_center = top_cap.center();
        let bottom_center = bottom_cap.center();
        let bar = Rect::new(
            whole.left,
            top_center.y,
            whole.width,
            bottom_center.y - top_center.y,
        );

        let color = self.base_color(theme);
        surface.fill_ellipse(top_cap, color);
        surface.fill_ellipse(bottom_cap, color);
        if !bar.is_empty() {
            surface.fill_rect(bar, color);
        }
    }

    fn paint_grip(&self, surface: &mut dyn Surface, theme: &Theme, dpi: Dpi) {
        let wide_enough = self.rect.width >= dpi.scale_x(GRIP_MIN_WIDTH_INCHES);
        let tall_enough = self.rect.height > dpi.divide_y(DOT_DIVISOR).saturating_add(2);
        if !wide_enough || !tall_enough || self.visibility != Visibility::Active {
            return;
        }
        let center = self.rect.center();
        let badge = Rect::anchored(
            Locus::Center,
            center.x,
            center.y,
            dpi.divide_x(GRIP_DIVISOR),
            dpi.divide_y(GRIP_DIVISOR),
        );
        surface.fill_rect(badge, theme.grip);
    }
}
