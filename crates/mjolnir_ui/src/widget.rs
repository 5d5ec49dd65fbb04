//! Widget trait and related types

use crate::event::Event;
use crate::renderer::Surface;
use crate::theme::Theme;
use crate::timer::TimerService;

/// The host-facing contract of a persistent panel widget
pub trait Widget<M> {
    /// Apply a new size from the layout owner
    fn resize(&mut self, width: i32, height: i32);

    /// Draw the widget in its own coordinate space
    fn draw(&self, surface: &mut dyn Surface, theme: &Theme);

    /// Handle an event, optionally producing a message for the host
    fn on_event(&mut self, event: &Event, timers: &mut dyn TimerService) -> Option<M>;
}
