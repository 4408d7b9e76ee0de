//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, TicketError};

/// A single recorded provider call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Provider method (`query`, `get`, `create`, `update`).
    pub method: String,
    /// Arguments the method was called with.
    pub input: serde_json::Value,
    /// `{"Ok": value}` or `{"Err": {kind, message}}`.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Version of the adapter that produced the recording.
    pub adapter_version: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

/// How a failed call is stored in a cassette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedError {
    /// Error classification.
    pub kind: ErrorKind,
    /// Display text of the error.
    pub message: String,
}

impl From<&TicketError> for RecordedError {
    fn from(err: &TicketError) -> Self {
        Self { kind: err.kind(), message: err.to_string() }
    }
}

impl From<RecordedError> for TicketError {
    fn from(recorded: RecordedError) -> Self {
        TicketError::from_recorded(recorded.kind, recorded.message)
    }
}
