//! Scenario host: drives a scrollbar against a document on a virtual clock.

use std::time::Duration;

use mjolnir_ui::prelude::*;
use mjolnir_ui::PixmapSurface;
use web_time::Instant;

use crate::config::PlaygroundConfig;
use crate::document::Document;
use crate::error::{PlaygroundError, Result};
use crate::scenario::{Scenario, Step};

/// One scroll event as the host saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Virtual milliseconds since the scenario started
    pub at_ms: u64,
    pub event: ScrollEvent,
    /// Document top line after the event was applied
    pub top_line: u32,
}

/// Owns the widget, the document and the timer queue, and replays steps.
pub struct Playground {
    bar: ScrollBar<ScrollEvent>,
    document: Document,
    timers: TimerQueue,
    start: Instant,
    theme: Theme,
    records: Vec<Record>,
}

impl Playground {
    pub fn new(scenario: &Scenario, config: &PlaygroundConfig) -> Self {
        let document = Document::new(scenario.lines, scenario.visible_lines, scenario.top_line);
        let mut bar = ScrollBar::with_config(config.scrollbar.clone())
            .size(scenario.width, scenario.height)
            .on_scroll(|event| event);
        bar.set_visibility(scenario.visibility);
        bar.refresh(document.exposure(), document.progress());

        let start = Instant::now();
        Self {
            bar,
            document,
            timers: TimerQueue::starting_at(start),
            start,
            theme: config.theme.clone(),
            records: Vec::new(),
        }
    }

    pub fn scrollbar(&self) -> &ScrollBar<ScrollEvent> {
        &self.bar
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Virtual time elapsed since the scenario started.
    pub fn elapsed(&self) -> Duration {
        self.timers.now().duration_since(self.start)
    }

    /// Replay every step in order.
    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.step(step);
        }
    }

    pub fn step(&mut self, step: &Step) {
        log::debug!("Step {:?}", step);
        match *step {
            Step::Press { x, y } => self.dispatch(Event::Pressed {
                position: Point::new(x, y),
            }),
            Step::Release { x, y } => self.dispatch(Event::Released {
                position: Point::new(x, y),
            }),
            Step::Move { x, y } => self.dispatch(Event::Moved {
                position: Point::new(x, y),
            }),
            Step::Enter => self.dispatch(Event::CursorEntered),
            Step::Leave => self.dispatch(Event::CursorLeft),
            Step::Wait { ms } => self.wait(Duration::from_millis(ms)),
            Step::Resize { width, height } => self.dispatch(Event::Resized { width, height }),
            Step::Visibility { state } => self.bar.set_visibility(state),
        }
        if self.bar.take_redraw() {
            log::trace!("Repaint requested, cursor {:?}", self.bar.cursor());
        }
    }

    /// Advance the virtual clock, delivering due timers in deadline order.
    fn wait(&mut self, duration: Duration) {
        let until = self.timers.now() + duration;
        while let Some(handle) = self.timers.pop_due(until) {
            self.dispatch(Event::Timer(handle));
        }
        self.timers.advance_to(until);
    }

    fn dispatch(&mut self, event: Event) {
        let Some(scroll) = self.bar.on_event(&event, &mut self.timers) else {
            return;
        };
        self.document.apply(scroll, self.bar.progress());
        self.bar.refresh(self.document.exposure(), self.document.progress());

        let record = Record {
            at_ms: self.elapsed().as_millis() as u64,
            event: scroll,
            top_line: self.document.top_line(),
        };
        log::info!(
            "{:>6} ms  {:?} -> top line {}",
            record.at_ms,
            record.event,
            record.top_line
        );
        self.records.push(record);
    }

    /// Paint the current frame into a new pixmap.
    pub fn render(&self) -> Result<PixmapSurface> {
        let (width, height) = self.bar.dimensions();
        if width == 0 || height == 0 {
            return Err(PlaygroundError::invalid_scenario(format!(
                "cannot render a {}x{} widget",
                width, height
            )));
        }
        let mut surface = PixmapSurface::new(width as u32, height as u32)?;
        self.bar.draw(&mut surface, &self.theme);
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground(top_line: u32) -> Playground {
        let scenario = Scenario {
            width: 20,
            height: 200,
            lines: 400,
            visible_lines: 100,
            top_line,
            visibility: Default::default(),
            steps: Vec::new(),
        };
        Playground::new(&scenario, &PlaygroundConfig::default())
    }

    fn events(playground: &Playground) -> Vec<ScrollEvent> {
        playground.records().iter().map(|r| r.event).collect()
    }

    #[test]
    fn test_initial_refresh() {
        let playground = playground(150);
        assert!((playground.scrollbar().exposure() - 0.25).abs() < 1e-6);
        assert!((playground.scrollbar().progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_track_hold_pages_with_repeat() {
        let mut playground = playground(0);
        playground.run(&[
            Step::Press { x: 10, y: 150 },
            Step::Wait { ms: 500 },
            Step::Release { x: 10, y: 150 },
            Step::Wait { ms: 1000 },
        ]);

        let times: Vec<u64> = playground.records().iter().map(|r| r.at_ms).collect();
        assert_eq!(times, vec![0, 400, 460]);
        assert_eq!(events(&playground), vec![ScrollEvent::LargeIncrement; 3]);
        assert_eq!(playground.document().top_line(), 300);
        assert_eq!(playground.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn test_drag_maps_to_lines() {
        let mut playground = playground(0);
        playground.run(&[
            Step::Press { x: 10, y: 50 },
            Step::Move { x: 10, y: 132 },
            Step::Release { x: 10, y: 132 },
        ]);

        assert_eq!(
            events(&playground),
            vec![ScrollEvent::ThumbTrack, ScrollEvent::ThumbPosition]
        );
        assert_eq!(playground.document().top_line(), 150);
        assert!(!playground.scrollbar().is_dragging());
    }

    #[test]
    fn test_extremities_jump() {
        let mut playground = playground(150);
        playground.run(&[Step::Press { x: 10, y: 25 }, Step::Release { x: 10, y: 25 }]);
        assert_eq!(playground.document().top_line(), 300);

        playground.run(&[Step::Press { x: 10, y: 5 }, Step::Wait { ms: 2000 }]);
        assert_eq!(playground.document().top_line(), 0);
        assert_eq!(events(&playground), vec![ScrollEvent::Last, ScrollEvent::First]);
    }

    #[test]
    fn test_visibility_step() {
        let mut playground = playground(0);
        playground.step(&Step::Visibility {
            state: mjolnir_ui::Visibility::Focused,
        });
        assert_eq!(playground.scrollbar().visibility(), mjolnir_ui::Visibility::Focused);
    }

    #[test]
    fn test_render_final_frame() {
        let playground = playground(0);
        let surface = playground.render().unwrap();
        assert_eq!((surface.width(), surface.height()), (20, 200));
    }

    #[test]
    fn test_render_empty_widget_fails() {
        let mut playground = playground(0);
        playground.step(&Step::Resize {
            width: 0,
            height: 200,
        });
        assert!(playground.render().is_err());
    }
}
