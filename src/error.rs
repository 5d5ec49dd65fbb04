//! Error types for the scenario playground.

use thiserror::Error;

/// Errors that can occur while loading or running a scenario.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// I/O error reading a scenario or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering the final frame failed
    #[error("Render error: {0}")]
    Render(#[from] mjolnir_ui::RenderError),

    /// Scenario parsed but describes something impossible
    #[error("Invalid scenario: {message}")]
    InvalidScenario {
        /// Description of the problem
        message: String,
    },

    /// Configuration version is newer than supported
    #[error("Configuration file version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Bad command line
    #[error("Argument error: {0}")]
    Args(String),
}

impl PlaygroundError {
    /// Create an invalid scenario error.
    pub fn invalid_scenario(message: impl Into<String>) -> Self {
        Self::InvalidScenario {
            message: message.into(),
        }
    }
}

impl From<pico_args::Error> for PlaygroundError {
    fn from(err: pico_args::Error) -> Self {
        Self::Args(err.to_string())
    }
}

/// Result type for playground operations.
pub type Result<T> = std::result::Result<T, PlaygroundError>;
