//! Scripted interaction scenarios.
//!
//! A scenario describes the widget size, the document it scrolls and a list
//! of input steps, for example:
//!
//! ```json
//! {
//!   "width": 20, "height": 200,
//!   "lines": 400, "visible_lines": 100,
//!   "steps": [
//!     { "action": "enter" },
//!     { "action": "press", "x": 10, "y": 150 },
//!     { "action": "wait", "ms": 500 },
//!     { "action": "release", "x": 10, "y": 150 }
//!   ]
//! }
//! ```

use std::path::Path;

use mjolnir_ui::Visibility;
use serde::{Deserialize, Serialize};

use crate::error::{PlaygroundError, Result};

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Press { x: i32, y: i32 },
    Release { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Enter,
    Leave,
    /// Let the virtual clock run, delivering due timers.
    Wait { ms: u64 },
    Resize { width: i32, height: i32 },
    /// Change the ambient visibility.
    Visibility { state: Visibility },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub lines: u32,
    pub visible_lines: u32,
    #[serde(default)]
    pub top_line: u32,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parse and validate a scenario.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let scenario = Self::from_json(&std::fs::read_to_string(path)?)?;
        log::info!("Loaded scenario {:?} with {} steps", path, scenario.steps.len());
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < 0 || self.height < 0 {
            return Err(PlaygroundError::invalid_scenario(format!(
                "widget size {}x{} is negative",
                self.width, self.height
            )));
        }
        if self.visible_lines == 0 {
            return Err(PlaygroundError::invalid_scenario("visible_lines must be at least 1"));
        }
        for (index, step) in self.steps.iter().enumerate() {
            if let Step::Resize { width, height } = step {
                if *width < 0 || *height < 0 {
                    return Err(PlaygroundError::invalid_scenario(format!(
                        "step {} resizes to {}x{}",
                        index, width, height
                    )));
                }
            }
        }
        Ok(())
    }
}
