//! mjolnir_ui - A headless vertical scrollbar widget
//!
//! The widget owns its layout, hover state, thumb drag and click-and-hold
//! auto-repeat. The host feeds it pointer and timer events, supplies a
//! `TimerService` and a drawing `Surface`, and receives `ScrollEvent`s mapped
//! through an `on_scroll` callback.

pub mod constants;
mod error;
mod event;
mod rect;
mod renderer;
mod skia;
mod theme;
mod timer;
mod units;
mod widget;
mod widgets;

pub use error::{RenderError, Result};
pub use event::{CursorHint, Event, ScrollEvent};
pub use rect::{Locus, Point, Rect, Scalar};
pub use renderer::{Color, DrawCommand, RecordingSurface, Surface};
pub use skia::PixmapSurface;
pub use theme::Theme;
pub use timer::{RepeatTimer, TimerHandle, TimerQueue, TimerService};
pub use units::{clamp_fraction, Dpi};
pub use widget::Widget;

pub use widgets::{
    DragMove, DragSession, Extremity, Interaction, Region, RegionKind, ScrollBar, ScrollBarConfig,
    Visibility,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{CursorHint, Event, ScrollEvent};
    pub use crate::rect::{Point, Rect};
    pub use crate::renderer::{Color, Surface};
    pub use crate::theme::Theme;
    pub use crate::timer::{TimerQueue, TimerService};
    pub use crate::widget::Widget;
    pub use crate::widgets::{ScrollBar, ScrollBarConfig, Visibility};
}
