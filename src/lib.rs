//! Mjolnir - scenario playground for the `mjolnir_ui` scrollbar
//!
//! Replays scripted pointer input against a `ScrollBar` hosted over a simple
//! line document, on a virtual clock, and reports the scroll events raised.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod host;
pub mod scenario;

pub use cli::{Options, USAGE};
pub use config::{LogLevel, PlaygroundConfig};
pub use document::Document;
pub use error::{PlaygroundError, Result};
pub use host::{Playground, Record};
pub use scenario::{Scenario, Step};
