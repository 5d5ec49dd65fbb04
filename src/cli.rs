//! Command line parsing.

use std::path::PathBuf;

use crate::error::{PlaygroundError, Result};

pub const USAGE: &str = "\
Usage: mjolnir <scenario.json> [--config <config.json>] [--png <frame.png>]

Replays a scripted pointer scenario against the scrollbar and prints the
scroll events it raised.

Options:
  --config <path>  Playground configuration (log level, scrollbar, theme)
  --png <path>     Write the final frame as a PNG
  -h, --help       Show this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub scenario: PathBuf,
    pub config: Option<PathBuf>,
    pub png: Option<PathBuf>,
}

impl Options {
    /// Parse options. Returns `Ok(None)` when help was requested.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Option<Self>> {
        if args.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let config = args.opt_value_from_str("--config")?;
        let png = args.opt_value_from_str("--png")?;
        let scenario = args.free_from_str()?;

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(PlaygroundError::Args(format!("unexpected arguments: {:?}", rest)));
        }

        Ok(Some(Self {
            scenario,
            config,
            png,
        }))
    }
}
