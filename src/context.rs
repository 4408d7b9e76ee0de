//! Provider context bundling the ticket port with its optional recorder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Map, Value};

use crate::adapters::live::JiraProvider;
use crate::adapters::recording::RecordingTicketProvider;
use crate::adapters::replaying::ReplayingTicketProvider;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::TicketError;
use crate::ports::tickets::TicketProvider;

/// Cassette name written into recordings made by the plugin.
const SESSION_NAME: &str = "ticketplugin-session";

/// Owns the provider the plugin dispatches to.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying). A recording context must be closed with [`finish`](Self::finish)
/// to write its cassette.
pub struct ProviderContext {
    /// Provider serving every ticket call.
    pub provider: Box<dyn TicketProvider>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ProviderContext {
    /// Creates a live context talking to Jira with the given adapter config.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::Config`] if the config is incomplete.
    pub fn live(config: &Map<String, Value>) -> Result<Self, TicketError> {
        let provider = JiraProvider::from_map(config)?;
        Ok(Self { provider: Box::new(provider), recorder: None })
    }

    /// Creates a live context whose calls are recorded to a cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::Config`] if the config is incomplete.
    pub fn recording(config: &Map<String, Value>, path: &Path) -> Result<Self, TicketError> {
        let live = JiraProvider::from_map(config)?;
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, SESSION_NAME)));
        let provider = RecordingTicketProvider::new(Box::new(live), Arc::clone(&recorder));
        Ok(Self { provider: Box::new(provider), recorder: Some(recorder) })
    }

    /// Creates a context that serves every call from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::load(path)?;
        Ok(Self { provider: Box::new(ReplayingTicketProvider::new(replayer)), recorder: None })
    }

    /// Whether calls made through this context are being recorded.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Closes the context, writing the cassette if one is being recorded.
    ///
    /// Returns the cassette path when one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, std::io::Error> {
        let Self { provider, recorder } = self;
        // The recording provider holds the other handle on the recorder.
        drop(provider);
        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| std::io::Error::other("cassette recorder is still shared"))?;
        let recorder = recorder.into_inner().unwrap_or_else(PoisonError::into_inner);
        if recorder.is_empty() {
            tracing::warn!("no ticket calls were recorded; writing an empty cassette");
        } else {
            tracing::debug!(interactions = recorder.len(), "writing cassette");
        }
        recorder.finish().map(Some)
    }
}
