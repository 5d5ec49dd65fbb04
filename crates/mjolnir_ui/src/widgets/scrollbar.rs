//! Vertical scrollbar panel widget.
//!
//! The bar is split top to bottom into an optional vent strip, the Up and
//! Down extremity buttons, and the track (Middle) the thumb moves in:
//!
//! ```text
//! +----+  vent (optional)
//! | o  |  up      -> First
//! | o  |  down    -> Last
//! |    |  track   -> LargeDecrement while held
//! |####|  thumb   -> drag: ThumbTrack ... ThumbPosition
//! |    |  track   -> LargeIncrement while held
//! +----+
//! ```
//!
//! The host reports content changes with `refresh(exposure, progress)` and
//! reacts to the `ScrollEvent`s the bar raises. Geometry is recomputed from
//! those two fractions, except while a drag is in progress, when the thumb
//! follows the pointer and progress is derived from the thumb instead.

use super::config::ScrollBarConfig;
use super::drag::DragSession;
use super::region::{Region, RegionKind, Visibility};
use crate::constants::{EXTREMITY_INCHES, INITIAL_EXPOSURE, INITIAL_PROGRESS, MIN_THUMB_INCHES};
use crate::event::{CursorHint, Event, ScrollEvent};
use crate::rect::{Locus, Point, Rect};
use crate::renderer::Surface;
use crate::theme::Theme;
use crate::timer::{RepeatTimer, TimerHandle, TimerService};
use crate::units::{clamp_fraction, Dpi};
use crate::widget::Widget;

/// Which extremity button the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremity {
    Up,
    Down,
}

/// What the scrollbar is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    HoverExtremity(Extremity),
    HoverTrack,
    Dragging,
    AutoRepeating(ScrollEvent),
}

/// A vertical scrollbar with extremity buttons, click-and-hold paging and a
/// draggable thumb.
pub struct ScrollBar<Message> {
    /// Indexed by `RegionKind::index`, in paint order
    regions: [Region; 6],
    width: i32,
    height: i32,
    config: ScrollBarConfig,
    exposure: f32,
    progress: f32,
    drag: Option<DragSession>,
    repeat: Option<RepeatTimer>,
    last_event: ScrollEvent,
    /// Ambient visibility restored when the pointer leaves
    visibility: Visibility,
    cursor: CursorHint,
    redraw: bool,
    on_scroll: Option<Box<dyn Fn(ScrollEvent) -> Message>>,
}

impl<Message> Default for ScrollBar<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> ScrollBar<Message> {
    /// Create a zero-sized scrollbar with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScrollBarConfig::default())
    }

    /// Create a zero-sized scrollbar with the given configuration.
    pub fn with_config(config: ScrollBarConfig) -> Self {
        let mut regions = RegionKind::ALL.map(Region::new);
        regions[RegionKind::Shadow.index()].set_hidden(true);

        let mut bar = Self {
            regions,
            width: 0,
            height: 0,
            config,
            exposure: INITIAL_EXPOSURE,
            progress: INITIAL_PROGRESS,
            drag: None,
            repeat: None,
            last_event: ScrollEvent::EndScroll,
            visibility: Visibility::default(),
            cursor: CursorHint::default(),
            redraw: true,
            on_scroll: None,
        };
        bar.layout();
        bar
    }

    /// Set the size (builder form of `set_size`).
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.set_size(width, height);
        self
    }

    /// Set the callback that turns scroll events into host messages.
    pub fn on_scroll<F>(mut self, f: F) -> Self
    where
        F: Fn(ScrollEvent) -> Message + 'static,
    {
        self.on_scroll = Some(Box::new(f));
        self
    }

    // =========================================================================
    // Host-facing model
    // =========================================================================

    /// Update the content model. Both fractions are clamped into `[0, 1]`.
    pub fn refresh(&mut self, exposure: f32, progress: f32) {
        self.exposure = clamp_fraction(exposure);
        self.progress = clamp_fraction(progress);
        self.layout();
    }

    /// Visible share of the content.
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    pub fn set_exposure(&mut self, exposure: f32) {
        self.refresh(exposure, self.progress);
    }

    /// Scroll position as a share of the maximum offset.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.refresh(self.exposure, progress);
    }

    /// Apply a new widget size. Negative dimensions are treated as zero.
    pub fn set_size(&mut self, width: i32, height: i32) {
        if width < 0 || height < 0 {
            log::warn!("Scrollbar resized to {}x{}, clamping to zero", width, height);
        }
        self.width = width.max(0);
        self.height = height.max(0);
        self.relayout_keeping_drag();
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn dpi(&self) -> Dpi {
        self.config.dpi
    }

    pub fn set_dpi(&mut self, dpi: Dpi) {
        self.config.dpi = dpi;
        self.relayout_keeping_drag();
    }

    pub fn config(&self) -> &ScrollBarConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScrollBarConfig) {
        self.config = config;
        if !self.config.show_shadow {
            self.region_mut(RegionKind::Shadow).set_hidden(true);
        }
        self.relayout_keeping_drag();
    }

    /// Set every region's visibility, and remember it as the ambient state
    /// restored when the pointer leaves.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        for region in &mut self.regions {
            region.set_visibility(visibility);
        }
        self.visibility = visibility;
        self.redraw = true;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn region(&self, kind: RegionKind) -> &Region {
        &self.regions[kind.index()]
    }

    fn region_mut(&mut self, kind: RegionKind) -> &mut Region {
        &mut self.regions[kind.index()]
    }

    /// Height of the track the thumb moves in.
    pub fn middle_height(&self) -> i32 {
        self.region(RegionKind::Middle).rect().height
    }

    /// Pointer shape for the last hovered region.
    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// Most recently raised event.
    pub fn last_event(&self) -> ScrollEvent {
        self.last_event
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_repeating(&self) -> bool {
        self.repeat.is_some()
    }

    pub fn interaction(&self) -> Interaction {
        if self.drag.is_some() {
            return Interaction::Dragging;
        }
        if let Some(repeat) = &self.repeat {
            return Interaction::AutoRepeating(repeat.event());
        }
        if self.region(RegionKind::Up).is_hovering() {
            Interaction::HoverExtremity(Extremity::Up)
        } else if self.region(RegionKind::Down).is_hovering() {
            Interaction::HoverExtremity(Extremity::Down)
        } else if self.region(RegionKind::Middle).is_hovering() {
            Interaction::HoverTrack
        } else {
            Interaction::Idle
        }
    }

    /// Returns `true` once after anything visible changed.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn layout(&mut self) {
        let dpi = self.config.dpi;
        let width = self.width;
        let extremity = dpi.scale_y(EXTREMITY_INCHES).max(0);
        let vent_height = if self.config.show_vent && width >= extremity {
            extremity
        } else {
            0
        };

        let vent = Rect::new(0, 0, width, vent_height);
        let up = Rect::new(0, vent.bottom(), width, extremity);
        let down = Rect::new(0, up.bottom(), width, extremity);
        let middle_height = self
            .height
            .saturating_sub(vent_height)
            .saturating_sub(extremity.saturating_mul(2))
            .max(0);
        let middle = Rect::new(0, down.bottom(), width, middle_height);

        let min_thumb = dpi.scale_x(MIN_THUMB_INCHES).max(0);
        let thumb_height = ((middle_height as f32 * self.exposure) as i32).max(min_thumb);

        let offset = if self.drag.is_some() {
            // The pointer owns the thumb position until the drag ends
            self.region(RegionKind::Thumb)
                .rect()
                .top
                .saturating_sub(middle.top)
                .clamp(0, middle_height)
        } else {
            // A thumb that would pass the track bottom sits on it instead
            ((middle_height as f32 * self.progress) as i32)
                .clamp(0, middle_height)
                .min(middle_height - thumb_height)
        };
        let thumb = Rect::new(middle.left, middle.top.saturating_add(offset), width, thumb_height);

        self.region_mut(RegionKind::Vent).set_rect(vent);
        self.region_mut(RegionKind::Up).set_rect(up);
        self.region_mut(RegionKind::Down).set_rect(down);
        self.region_mut(RegionKind::Middle).set_rect(middle);
        let thumb_region = self.region_mut(RegionKind::Thumb);
        thumb_region.set_rect(thumb);
        thumb_region.set_hidden(thumb_height >= middle_height);

        log::trace!(
            "Scrollbar layout {}x{}: track {:?}, thumb {:?}",
            self.width,
            self.height,
            middle,
            thumb
        );
        self.redraw = true;
    }

    /// Relayout after a geometry change. A dragged thumb stays where the
    /// pointer put it, clamped to the new track, and progress follows it.
    fn relayout_keeping_drag(&mut self) {
        self.layout();
        if self.drag.is_some() {
            let middle = self.region(RegionKind::Middle).rect();
            let offset = self.region(RegionKind::Thumb).rect().top.saturating_sub(middle.top);
            self.progress = track_fraction(offset, middle.height);
        }
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    fn raise(&mut self, event: ScrollEvent) -> Option<ScrollEvent> {
        self.last_event = event;
        log::trace!("Scroll event {:?} at progress {:.3}", event, self.progress);
        Some(event)
    }

    fn handle(&mut self, event: &Event, timers: &mut dyn TimerService) -> Option<ScrollEvent> {
        match *event {
            Event::Pressed { position } => self.press(position, timers),
            Event::Released { .. } => self.release(timers),
            Event::Moved { position } => self.pointer_moved(position),
            Event::CursorEntered => {
                self.pointer_entered();
                None
            }
            Event::CursorLeft => self.pointer_left(timers),
            Event::Resized { width, height } => {
                self.set_size(width, height);
                None
            }
            Event::Timer(handle) => self.timer_fired(handle, timers),
        }
    }

    fn press(&mut self, point: Point, timers: &mut dyn TimerService) -> Option<ScrollEvent> {
        // A press without a matching release must not leave a second
        // interaction running
        self.cancel_repeat(timers);
        if self.drag.take().is_some() {
            log::warn!("Press while a thumb drag was active, dropping the drag");
        }

        if self.region(RegionKind::Up).hit_test(point) {
            self.progress = 0.0;
            self.layout();
            return self.raise(ScrollEvent::First);
        }
        if self.region(RegionKind::Down).hit_test(point) {
            self.progress = 1.0;
            self.layout();
            return self.raise(ScrollEvent::Last);
        }
        if !self.region(RegionKind::Middle).hit_test(point) {
            return None;
        }

        let thumb = self.region(RegionKind::Thumb).rect();
        match thumb.locate(point) {
            Locus::Center => {
                self.begin_drag(thumb, point);
                None
            }
            locus if locus.is_above() => self.start_repeat(ScrollEvent::LargeDecrement, timers),
            locus if locus.is_below() => self.start_repeat(ScrollEvent::LargeIncrement, timers),
            _ => None,
        }
    }

    fn begin_drag(&mut self, thumb: Rect, point: Point) {
        log::debug!("Thumb drag started at {:?}", point);
        self.drag = Some(DragSession::begin(thumb, point));
        self.show_shadow(thumb);
        self.redraw = true;
    }

    fn start_repeat(&mut self, event: ScrollEvent, timers: &mut dyn TimerService) -> Option<ScrollEvent> {
        self.repeat = Some(RepeatTimer::start(
            timers,
            event,
            self.config.first_delay_duration(),
            self.config.repeat_interval_duration(),
        ));
        let thumb = self.region(RegionKind::Thumb).rect();
        self.show_shadow(thumb);
        self.raise(event)
    }

    fn cancel_repeat(&mut self, timers: &mut dyn TimerService) {
        if let Some(repeat) = self.repeat.take() {
            repeat.stop(timers);
        }
    }

    fn finish_drag(&mut self) -> Option<ScrollEvent> {
        let session = self.drag.take()?;
        log::debug!(
            "Thumb drag from {:?} ended at progress {:.3}",
            session.origin(),
            self.progress
        );
        self.layout();
        self.raise(ScrollEvent::ThumbPosition)
    }

    fn pointer_moved(&mut self, point: Point) -> Option<ScrollEvent> {
        if let Some(session) = self.drag {
            let middle = self.region(RegionKind::Middle).rect();
            let thumb = self.region(RegionKind::Thumb).rect();
            let step = session.follow(point, middle, thumb);

            self.region_mut(RegionKind::Thumb).set_rect(step.rect);
            self.progress = track_fraction(step.offset, middle.height);
            self.redraw = true;
            // The host may refresh us from its handler; it reads progress back
            return self.raise(ScrollEvent::ThumbTrack);
        }

        let mut changed = false;
        for region in &mut self.regions {
            if region.kind() != RegionKind::Shadow {
                changed |= region.hover_update(point);
            }
        }
        if changed {
            self.redraw = true;
        }
        self.update_cursor(point);
        None
    }

    fn update_cursor(&mut self, point: Point) {
        let hint = if self.region(RegionKind::Vent).hit_test(point) {
            CursorHint::Move
        } else if self.region(RegionKind::Up).hit_test(point) {
            CursorHint::PanNorth
        } else if self.region(RegionKind::Down).hit_test(point) {
            CursorHint::PanSouth
        } else if self.region(RegionKind::Middle).hit_test(point) {
            let thumb = self.region(RegionKind::Thumb);
            if !thumb.is_hidden() && thumb.hit_test(point) {
                CursorHint::ResizeVertical
            } else {
                CursorHint::Hand
            }
        } else {
            return;
        };
        self.cursor = hint;
    }

    fn release(&mut self, timers: &mut dyn TimerService) -> Option<ScrollEvent> {
        self.cancel_repeat(timers);
        let event = self.finish_drag();
        self.hide_shadow();
        self.redraw = true;
        event
    }

    fn pointer_entered(&mut self) {
        for region in &mut self.regions {
            region.set_visibility(Visibility::Active);
        }
        self.redraw = true;
    }

    fn pointer_left(&mut self, timers: &mut dyn TimerService) -> Option<ScrollEvent> {
        self.cancel_repeat(timers);
        let event = self.finish_drag();
        self.hide_shadow();

        let ambient = self.visibility;
        for region in &mut self.regions {
            region.set_visibility(ambient);
            region.hover_stop();
        }
        self.redraw = true;
        event
    }

    fn timer_fired(&mut self, handle: TimerHandle, timers: &mut dyn TimerService) -> Option<ScrollEvent> {
        let Some(repeat) = self.repeat.as_mut() else {
            log::trace!("Ignoring timer {} with no repeat armed", handle.id());
            return None;
        };
        if !repeat.owns(handle) {
            log::trace!("Ignoring stale timer {}", handle.id());
            return None;
        }
        let event = repeat.tick(timers);
        self.raise(event)
    }

    fn show_shadow(&mut self, rect: Rect) {
        if !self.config.show_shadow {
            return;
        }
        let shadow = self.region_mut(RegionKind::Shadow);
        shadow.set_rect(rect);
        shadow.set_hidden(false);
    }

    fn hide_shadow(&mut self) {
        self.region_mut(RegionKind::Shadow).set_hidden(true);
    }
}

/// Thumb offset as a fraction of the track height, 0 on an empty track.
fn track_fraction(offset: i32, track_height: i32) -> f32 {
    if track_height > 0 {
        clamp_fraction(offset as f32 / track_height as f32)
    } else {
        0.0
    }
}

impl<Message> Widget<Message> for ScrollBar<Message> {
    fn resize(&mut self, width: i32, height: i32) {
        self.set_size(width, height);
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        surface.fill_rect(Rect::new(0, 0, self.width, self.height), theme.background);
        let dpi = self.config.dpi;
        for region in &self.regions {
            region.paint(surface, theme, dpi);
        }
    }

    fn on_event(&mut self, event: &Event, timers: &mut dyn TimerService) -> Option<Message> {
        let scroll = self.handle(event, timers)?;
        let on_scroll = self.on_scroll.as_ref()?;
        Some(on_scroll(scroll))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use web_time::Instant;

    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::skia::PixmapSurface;
    use crate::timer::TimerQueue;

    const EPSILON: f32 = 1e-6;

    struct Harness {
        bar: ScrollBar<ScrollEvent>,
        timers: TimerQueue,
        start: Instant,
    }

    impl Harness {
        fn new(width: i32, height: i32) -> Self {
            Self::with_config(width, height, ScrollBarConfig::default())
        }

        fn with_config(width: i32, height: i32, config: ScrollBarConfig) -> Self {
            let start = Instant::now();
            Self {
                bar: ScrollBar::with_config(config).size(width, height).on_scroll(|e| e),
                timers: TimerQueue::starting_at(start),
                start,
            }
        }

        fn send(&mut self, event: Event) -> Option<ScrollEvent> {
            self.bar.on_event(&event, &mut self.timers)
        }

        fn press(&mut self, x: i32, y: i32) -> Option<ScrollEvent> {
            self.send(Event::Pressed {
                position: Point::new(x, y),
            })
        }

        fn release(&mut self, x: i32, y: i32) -> Option<ScrollEvent> {
            self.send(Event::Released {
                position: Point::new(x, y),
            })
        }

        fn move_to(&mut self, x: i32, y: i32) -> Option<ScrollEvent> {
            self.send(Event::Moved {
                position: Point::new(x, y),
            })
        }

        /// Deliver every timer due up to `ms` after start.
        fn run_until(&mut self, ms: u64) -> Vec<ScrollEvent> {
            let until = self.start + Duration::from_millis(ms);
            let mut raised = Vec::new();
            while let Some(handle) = self.timers.pop_due(until) {
                if let Some(event) = self.send(Event::Timer(handle)) {
                    raised.push(event);
                }
            }
            self.timers.advance_to(until);
            raised
        }

        fn thumb(&self) -> Rect {
            self.bar.region(RegionKind::Thumb).rect()
        }
    }

    #[test]
    fn test_refresh_clamps_fractions() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 200);
        let samples = [-1.0, -0.25, 0.0, 0.4, 1.0, 1.5, 2.0];
        for &e in &samples {
            for &p in &samples {
                bar.refresh(e, p);
                assert!((0.0..=1.0).contains(&bar.exposure()));
                assert!((0.0..=1.0).contains(&bar.progress()));
                assert!((bar.exposure() - e.clamp(0.0, 1.0)).abs() < EPSILON);
                assert!((bar.progress() - p.clamp(0.0, 1.0)).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_setters_preserve_other_fraction() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 200);
        bar.refresh(0.3, 0.6);
        bar.set_progress(0.2);
        assert!((bar.exposure() - 0.3).abs() < EPSILON);
        bar.set_exposure(7.0);
        assert!((bar.progress() - 0.2).abs() < EPSILON);
        assert_eq!(bar.exposure(), 1.0);
    }

    #[test]
    fn test_reference_layout_at_96_dpi() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 200);
        bar.refresh(0.25, 0.0);

        assert_eq!(bar.region(RegionKind::Up).rect(), Rect::new(0, 0, 20, 18));
        assert_eq!(bar.region(RegionKind::Down).rect(), Rect::new(0, 18, 20, 18));
        assert_eq!(bar.middle_height(), 164);
        assert_eq!(bar.region(RegionKind::Thumb).rect().height, 41);
        assert!(!bar.region(RegionKind::Thumb).is_hidden());
    }

    #[test]
    fn test_thumb_floors_at_dpi_minimum() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 76);
        bar.refresh(0.01, 0.0);
        assert_eq!(bar.middle_height(), 40);
        assert_eq!(bar.region(RegionKind::Thumb).rect().height, 14);
    }

    #[test]
    fn test_thumb_height_monotonic_in_exposure() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 300);
        let mut previous = 0;
        for step in 0..=100 {
            bar.refresh(step as f32 / 100.0, 0.5);
            let height = bar.region(RegionKind::Thumb).rect().height;
            assert!(height >= previous);
            assert!(height >= 14);
            previous = height;
        }
    }

    #[test]
    fn test_thumb_hidden_only_when_fully_exposed() {
        for height in [60, 200, 1000] {
            let mut bar: ScrollBar<()> = ScrollBar::new().size(20, height);
            bar.refresh(1.0, 0.0);
            assert!(bar.region(RegionKind::Thumb).is_hidden());
            bar.refresh(0.9, 0.0);
            assert!(!bar.region(RegionKind::Thumb).is_hidden());
        }
    }

    #[test]
    fn test_thumb_never_overflows_track() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 200);
        bar.refresh(0.5, 1.0);
        let thumb = bar.region(RegionKind::Thumb).rect();
        let middle = bar.region(RegionKind::Middle).rect();
        assert_eq!(thumb.bottom(), middle.bottom());
        assert_eq!(thumb.height, 82);
    }

    #[test]
    fn test_drag_round_trip_to_top() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);
        assert_eq!(h.thumb().top, 36 + 82);

        assert_eq!(h.press(10, 130), None);
        assert!(h.bar.is_dragging());
        assert_eq!(h.bar.interaction(), Interaction::Dragging);

        let mut events = Vec::new();
        events.extend(h.move_to(10, 100));
        assert!((h.bar.progress() - 52.0 / 164.0).abs() < EPSILON);
        events.extend(h.move_to(10, 40));
        events.extend(h.release(10, 40));

        assert_eq!(
            events,
            vec![
                ScrollEvent::ThumbTrack,
                ScrollEvent::ThumbTrack,
                ScrollEvent::ThumbPosition
            ]
        );
        assert_eq!(h.bar.progress(), 0.0);
        assert_eq!(h.thumb().top, 36);
        assert!(!h.bar.is_dragging());
        assert!(h.timers.is_empty());
    }

    #[test]
    fn test_host_refresh_during_drag_is_read_back() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);
        h.press(10, 130);

        assert_eq!(h.move_to(10, 140), Some(ScrollEvent::ThumbTrack));
        let dragged_top = h.thumb().top;

        // Host snaps to its own line grid
        h.bar.refresh(0.25, 0.5);
        assert!((h.bar.progress() - 0.5).abs() < EPSILON);
        assert_eq!(h.thumb().top, dragged_top);

        assert_eq!(h.release(10, 140), Some(ScrollEvent::ThumbPosition));
        assert_eq!(h.thumb().top, 36 + 82);
    }

    #[test]
    fn test_resize_mid_drag_rederives_progress() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);
        h.press(10, 130);
        h.move_to(10, 140);
        assert_eq!(h.thumb().top, 128);

        h.send(Event::Resized {
            width: 20,
            height: 100,
        });
        assert_eq!(h.bar.middle_height(), 64);
        assert_eq!(h.thumb().top, 36 + 64);
        assert_eq!(h.bar.progress(), 1.0);

        assert_eq!(h.release(10, 140), Some(ScrollEvent::ThumbPosition));
        assert_eq!(h.bar.progress(), 1.0);
        assert_eq!(h.thumb().bottom(), 100);
    }

    #[test]
    fn test_very_tall_widget_at_end_stays_in_track() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, i32::MAX);
        bar.refresh(0.1, 1.0);

        let thumb = bar.region(RegionKind::Thumb).rect();
        let middle = bar.region(RegionKind::Middle).rect();
        assert_eq!(thumb.bottom(), middle.bottom());
        assert!(thumb.top >= middle.top);
        assert_eq!(middle.bottom(), i32::MAX);

        let mut surface = RecordingSurface::new();
        bar.draw(&mut surface, &Theme::light());
    }

    #[test]
    fn test_config_with_bad_dpi_lays_out() {
        let config: ScrollBarConfig =
            serde_json::from_str(r#"{ "dpi": { "x": -96.0, "y": 1e10 } }"#).unwrap();
        let bar: ScrollBar<()> = ScrollBar::with_config(config).size(20, 200);
        assert_eq!(bar.region(RegionKind::Up).rect().height, 18);
        assert_eq!(bar.middle_height(), 164);
    }

    #[test]
    fn test_extreme_dpi_never_faults() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 200);
        bar.set_dpi(Dpi {
            x: 1e10,
            y: 1e10,
        });
        assert_eq!(bar.middle_height(), 0);
        assert!(bar.region(RegionKind::Thumb).is_hidden());

        let mut surface = RecordingSurface::new();
        bar.draw(&mut surface, &Theme::light());
    }

    #[test]
    fn test_up_click_is_one_shot() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.7);

        assert_eq!(h.press(10, 5), Some(ScrollEvent::First));
        assert_eq!(h.bar.progress(), 0.0);
        assert!(!h.bar.is_repeating());
        assert!(h.timers.is_empty());
        assert!(h.run_until(5_000).is_empty());
        assert_eq!(h.release(10, 5), None);
    }

    #[test]
    fn test_down_click_jumps_to_end() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.1);

        assert_eq!(h.press(10, 20), Some(ScrollEvent::Last));
        assert_eq!(h.bar.progress(), 1.0);
        assert_eq!(h.bar.last_event(), ScrollEvent::Last);
        assert!(h.timers.is_empty());
        assert_eq!(h.thumb().bottom(), 200);
    }

    #[test]
    fn test_track_click_above_thumb_repeats() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);

        assert_eq!(h.press(10, 60), Some(ScrollEvent::LargeDecrement));
        assert_eq!(
            h.bar.interaction(),
            Interaction::AutoRepeating(ScrollEvent::LargeDecrement)
        );

        assert!(h.run_until(399).is_empty());
        assert_eq!(h.run_until(400), vec![ScrollEvent::LargeDecrement]);
        assert!(h.run_until(459).is_empty());
        assert_eq!(h.run_until(460), vec![ScrollEvent::LargeDecrement]);
        assert_eq!(h.run_until(580).len(), 2);

        assert_eq!(h.release(10, 60), None);
        assert!(!h.bar.is_repeating());
        assert!(h.timers.is_empty());
        assert!(h.run_until(2_000).is_empty());
    }

    #[test]
    fn test_track_click_below_thumb_increments() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.0);

        assert_eq!(h.press(10, 150), Some(ScrollEvent::LargeIncrement));
        assert_eq!(h.run_until(400), vec![ScrollEvent::LargeIncrement]);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);
        h.press(10, 60);
        let handle = h.timers.pop_due(h.start + Duration::from_millis(400)).unwrap();
        h.release(10, 60);

        assert_eq!(h.send(Event::Timer(handle)), None);
    }

    #[test]
    fn test_press_replaces_running_repeat() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);
        h.press(10, 60);
        assert!(h.bar.is_repeating());

        assert_eq!(h.press(10, 130), None);
        assert!(h.bar.is_dragging());
        assert!(!h.bar.is_repeating());
        assert!(h.timers.is_empty());
    }

    #[test]
    fn test_leave_ends_drag_and_restores_visibility() {
        let mut h = Harness::new(20, 200);
        h.bar.set_visibility(Visibility::Focused);
        h.bar.refresh(0.25, 0.5);

        h.send(Event::CursorEntered);
        assert_eq!(h.bar.region(RegionKind::Up).visibility(), Visibility::Active);

        h.press(10, 130);
        h.move_to(10, 120);
        assert_eq!(h.send(Event::CursorLeft), Some(ScrollEvent::ThumbPosition));
        assert!(!h.bar.is_dragging());
        for kind in RegionKind::ALL {
            assert_eq!(h.bar.region(kind).visibility(), Visibility::Focused);
            assert!(!h.bar.region(kind).is_hovering());
        }
    }

    #[test]
    fn test_leave_stops_repeat() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);
        h.press(10, 60);
        assert_eq!(h.send(Event::CursorLeft), None);
        assert!(h.timers.is_empty());
        assert_eq!(h.bar.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_hover_and_cursor_hints() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);

        h.move_to(10, 5);
        assert_eq!(h.bar.cursor(), CursorHint::PanNorth);
        assert_eq!(h.bar.interaction(), Interaction::HoverExtremity(Extremity::Up));
        h.move_to(10, 20);
        assert_eq!(h.bar.cursor(), CursorHint::PanSouth);
        h.move_to(10, 130);
        assert_eq!(h.bar.cursor(), CursorHint::ResizeVertical);
        assert!(h.bar.region(RegionKind::Thumb).is_hovering());
        h.move_to(10, 60);
        assert_eq!(h.bar.cursor(), CursorHint::Hand);
        assert_eq!(h.bar.interaction(), Interaction::HoverTrack);

        // Outside the widget the last hint sticks
        h.move_to(50, 60);
        assert_eq!(h.bar.cursor(), CursorHint::Hand);
    }

    #[test]
    fn test_hidden_thumb_gives_no_resize_cursor_but_still_drags() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(1.0, 0.0);

        h.move_to(10, 100);
        assert_eq!(h.bar.cursor(), CursorHint::Hand);
        assert_eq!(h.press(10, 100), None);
        assert!(h.bar.is_dragging());
    }

    #[test]
    fn test_take_redraw_tracks_hover_changes() {
        let mut h = Harness::new(20, 200);
        h.bar.take_redraw();

        h.move_to(10, 5);
        assert!(h.bar.take_redraw());
        assert!(!h.bar.take_redraw());
        h.move_to(11, 6);
        assert!(!h.bar.take_redraw());
    }

    #[test]
    fn test_negative_size_clamps() {
        let mut h = Harness::new(20, 200);
        h.send(Event::Resized {
            width: -5,
            height: -10,
        });
        assert_eq!(h.bar.dimensions(), (0, 0));
        assert_eq!(h.bar.middle_height(), 0);

        let mut surface = RecordingSurface::new();
        h.bar.draw(&mut surface, &Theme::light());
        assert_eq!(h.press(0, 0), None);
    }

    #[test]
    fn test_vent_shifts_layout() {
        let config = ScrollBarConfig::default().show_vent(true);
        let mut h = Harness::with_config(20, 200, config);
        h.bar.refresh(0.25, 0.0);

        assert_eq!(h.bar.region(RegionKind::Vent).rect().height, 18);
        assert_eq!(h.bar.region(RegionKind::Up).rect().top, 18);
        assert_eq!(h.bar.middle_height(), 146);
        h.move_to(10, 3);
        assert_eq!(h.bar.cursor(), CursorHint::Move);
        assert_eq!(h.press(10, 3), None);
    }

    #[test]
    fn test_narrow_widget_drops_vent() {
        let config = ScrollBarConfig::default().show_vent(true);
        let bar: ScrollBar<()> = ScrollBar::with_config(config).size(10, 200);
        assert_eq!(bar.region(RegionKind::Vent).rect().height, 0);
        assert_eq!(bar.middle_height(), 164);
    }

    #[test]
    fn test_shadow_marks_press_origin() {
        let mut h = Harness::new(20, 200);
        h.bar.refresh(0.25, 0.5);
        let origin = h.thumb();

        h.press(10, 60);
        h.bar.refresh(0.25, 0.3);
        let shadow = h.bar.region(RegionKind::Shadow);
        assert!(!shadow.is_hidden());
        assert_eq!(shadow.rect(), origin);

        h.release(10, 60);
        assert!(h.bar.region(RegionKind::Shadow).is_hidden());
    }

    #[test]
    fn test_shadow_can_be_disabled() {
        let config = ScrollBarConfig::default().show_shadow(false);
        let mut h = Harness::with_config(20, 200, config);
        h.bar.refresh(0.25, 0.5);
        h.press(10, 60);
        assert!(h.bar.region(RegionKind::Shadow).is_hidden());
    }

    #[test]
    fn test_dpi_change_relayouts() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 400);
        bar.set_dpi(Dpi::new(192.0, 192.0));
        assert_eq!(bar.region(RegionKind::Up).rect().height, 36);
        assert_eq!(bar.middle_height(), 400 - 72);
    }

    #[test]
    fn test_without_callback_events_are_dropped() {
        let mut bar: ScrollBar<u32> = ScrollBar::new().size(20, 200);
        let mut timers = TimerQueue::new();
        let message = bar.on_event(
            &Event::Pressed {
                position: Point::new(10, 5),
            },
            &mut timers,
        );
        assert_eq!(message, None);
        assert_eq!(bar.last_event(), ScrollEvent::First);
    }

    #[test]
    fn test_draw_renders_grip_when_active() {
        let mut bar: ScrollBar<()> = ScrollBar::new().size(20, 200);
        bar.refresh(0.25, 0.5);
        bar.set_visibility(Visibility::Active);

        let mut surface = PixmapSurface::new(20, 200).unwrap();
        let theme = Theme::light();
        bar.draw(&mut surface, &theme);

        let thumb = bar.region(RegionKind::Thumb).rect().center();
        assert_eq!(
            surface.pixel(thumb.x as u32, thumb.y as u32),
            Some(theme.grip.to_rgba8())
        );
        assert_eq!(surface.pixel(0, 0), Some(theme.background.to_rgba8()));
    }
}
