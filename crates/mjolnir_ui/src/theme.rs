//! Color theme for the panel widgets
//!
//! Provides the classic light palette and a dark variant. Paint code picks
//! colors from here rather than hardcoding them.

use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// A complete color theme for the scrollbar and its regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Widget background, painted under every region
    pub background: Color,

    /// Region color when hovered, or when the panel is active/focused
    pub active: Color,

    /// Region color when the panel is inactive and not hovered
    pub inactive: Color,

    /// Grip mark drawn at the thumb center
    pub grip: Color,

    /// Translucent marker of where the thumb was when a press began
    pub shadow: Color,
}

impl Theme {
    /// Light palette matching the document shell's default chrome
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(235, 235, 240),
            active: Color::from_rgb8(122, 164, 234),
            inactive: Color::from_rgb8(160, 160, 160),
            grip: Color::WHITE,
            shadow: Color::from_rgba8(160, 160, 160, 160),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(0.12, 0.12, 0.15),
            active: Color::rgb(0.35, 0.52, 0.92),
            inactive: Color::rgb(0.40, 0.40, 0.45),
            grip: Color::rgb(0.92, 0.92, 0.95),
            shadow: Color::rgba(0.55, 0.55, 0.60, 0.5),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
