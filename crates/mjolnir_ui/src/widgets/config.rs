//! Widget configuration structs for customizable behavior.
//!
//! These configuration structs centralize tunables so hosts can load them from
//! their own settings files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{REPEAT_FIRST_DELAY_MS, REPEAT_INTERVAL_MS};
use crate::units::Dpi;

/// Configuration for scrollbar behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollBarConfig {
    /// Pause before a held track click starts repeating
    #[serde(default = "default_first_delay_ms")]
    pub first_delay_ms: u64,

    /// Repeat interval once repeating
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,

    /// Resolution used to size regions
    #[serde(default)]
    pub dpi: Dpi,

    /// Reserve a grip strip above the Up button
    #[serde(default)]
    pub show_vent: bool,

    /// Show where the thumb was while a track click or drag is held
    #[serde(default = "default_show_shadow")]
    pub show_shadow: bool,
}

fn default_first_delay_ms() -> u64 {
    REPEAT_FIRST_DELAY_MS
}

fn default_repeat_interval_ms() -> u64 {
    REPEAT_INTERVAL_MS
}

fn default_show_shadow() -> bool {
    true
}

impl Default for ScrollBarConfig {
    fn default() -> Self {
        Self {
            first_delay_ms: default_first_delay_ms(),
            repeat_interval_ms: default_repeat_interval_ms(),
            dpi: Dpi::default(),
            show_vent: false,
            show_shadow: default_show_shadow(),
        }
    }
}

impl ScrollBarConfig {
    /// Create a new scrollbar configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pause before the first repeat.
    pub fn first_delay(mut self, delay: Duration) -> Self {
        self.first_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the steady repeat interval.
    pub fn repeat_interval(mut self, interval: Duration) -> Self {
        self.repeat_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Set the resolution.
    pub fn dpi(mut self, dpi: Dpi) -> Self {
        self.dpi = dpi;
        self
    }

    /// Enable or disable the vent strip.
    pub fn show_vent(mut self, show: bool) -> Self {
        self.show_vent = show;
        self
    }

    /// Enable or disable the press shadow.
    pub fn show_shadow(mut self, show: bool) -> Self {
        self.show_shadow = show;
        self
    }

    pub fn first_delay_duration(&self) -> Duration {
        Duration::from_millis(self.first_delay_ms)
    }

    /// Steady interval, never longer than the first delay.
    pub fn repeat_interval_duration(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms.min(self.first_delay_ms))
    }
}
