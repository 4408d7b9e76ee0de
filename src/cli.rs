//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::plugin::Mode;

/// Top-level CLI parser for `ticketplugin`.
#[derive(Debug, Parser)]
#[command(
    name = "ticketplugin",
    version,
    about = "Jira ticket provider speaking JSON-RPC over stdin/stdout"
)]
pub struct Cli {
    /// Record every provider call to this cassette file, written at end of input.
    #[arg(long, value_name = "FILE", conflicts_with = "replay")]
    pub record: Option<PathBuf>,

    /// Serve every call from this cassette file instead of Jira.
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset (logs go to stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Provider mode selected by the flags.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match (&self.record, &self.replay) {
            (Some(path), _) => Mode::Record(path.clone()),
            (None, Some(path)) => Mode::Replay(path.clone()),
            (None, None) => Mode::Live,
        }
    }
}
