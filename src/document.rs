//! Line-oriented content model driven by scroll events.

use mjolnir_ui::ScrollEvent;

/// A document of `lines` lines viewed through a window of `visible_lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    lines: u32,
    visible_lines: u32,
    top_line: u32,
}

impl Document {
    /// Create a document. `top_line` is clamped to the last full page.
    pub fn new(lines: u32, visible_lines: u32, top_line: u32) -> Self {
        let mut document = Self {
            lines,
            visible_lines,
            top_line: 0,
        };
        document.set_top_line(top_line);
        document
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn visible_lines(&self) -> u32 {
        self.visible_lines
    }

    pub fn top_line(&self) -> u32 {
        self.top_line
    }

    /// Highest valid top line.
    pub fn max_top(&self) -> u32 {
        self.lines.saturating_sub(self.visible_lines)
    }

    pub fn set_top_line(&mut self, top_line: u32) {
        self.top_line = top_line.min(self.max_top());
    }

    /// Visible share of the document.
    pub fn exposure(&self) -> f32 {
        if self.lines == 0 {
            return 1.0;
        }
        (self.visible_lines as f32 / self.lines as f32).min(1.0)
    }

    /// Scroll position as a share of `max_top`.
    pub fn progress(&self) -> f32 {
        let max_top = self.max_top();
        if max_top == 0 {
            return 0.0;
        }
        self.top_line as f32 / max_top as f32
    }

    /// Apply a scroll request. `progress` is the scrollbar's own reading,
    /// used for thumb events. Returns `true` when the top line moved.
    pub fn apply(&mut self, event: ScrollEvent, progress: f32) -> bool {
        let before = self.top_line;
        let page = self.visible_lines.max(1);
        let target = match event {
            ScrollEvent::First => 0,
            ScrollEvent::Last => self.max_top(),
            ScrollEvent::SmallDecrement => self.top_line.saturating_sub(1),
            ScrollEvent::SmallIncrement => self.top_line.saturating_add(1),
            ScrollEvent::LargeDecrement => self.top_line.saturating_sub(page),
            ScrollEvent::LargeIncrement => self.top_line.saturating_add(page),
            thumb if thumb.is_thumb() => {
                (progress.clamp(0.0, 1.0) * self.max_top() as f32).round() as u32
            }
            _ => before,
        };
        self.set_top_line(target);
        self.top_line != before
    }
}
