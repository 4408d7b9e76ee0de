//! Error taxonomy for ticket provider operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a ticket provider operation.
///
/// Nothing in this crate retries; every variant is surfaced to the caller
/// as soon as it occurs.
#[derive(Debug, Error)]
pub enum TicketError {
    /// Required configuration is missing or malformed.
    #[error("{message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },

    /// The ticket does not exist upstream.
    #[error("ticket not found")]
    NotFound,

    /// Building or executing an HTTP request failed.
    #[error("{context}: {source}")]
    Transport {
        /// Which phase failed (e.g. `execute transitions request`).
        context: &'static str,
        /// Underlying client error, including timeouts.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with an unexpected status.
    #[error("jira api error: {status} {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A response or request body could not be (de)serialized.
    #[error("{context}: {source}")]
    Decode {
        /// Which body failed.
        context: &'static str,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// No currently legal transition leads to the requested status.
    #[error("no transition found to status: {status}")]
    TransitionNotFound {
        /// The requested status name.
        status: String,
    },

    /// A cassette could not serve the requested call.
    #[error("cassette: {message}")]
    Cassette {
        /// What was missing.
        message: String,
    },

    /// An error served back from a recorded cassette.
    #[error("{message}")]
    Replayed {
        /// Kind of the originally recorded error.
        kind: ErrorKind,
        /// Display text of the originally recorded error.
        message: String,
    },
}

/// Coarse classification of a [`TicketError`], stable across serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`TicketError::Config`].
    Config,
    /// See [`TicketError::NotFound`].
    NotFound,
    /// See [`TicketError::Transport`].
    Transport,
    /// See [`TicketError::Api`].
    Api,
    /// See [`TicketError::Decode`].
    Decode,
    /// See [`TicketError::TransitionNotFound`].
    TransitionNotFound,
    /// See [`TicketError::Cassette`].
    Cassette,
}

impl TicketError {
    /// Builds a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config { .. } => ErrorKind::Config,
            Self::NotFound => ErrorKind::NotFound,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Api,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::TransitionNotFound { .. } => ErrorKind::TransitionNotFound,
            Self::Cassette { .. } => ErrorKind::Cassette,
            Self::Replayed { kind, .. } => *kind,
        }
    }

    /// Whether this is the distinguished not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Rebuilds an error from its recorded kind and message.
    ///
    /// Not-found comes back as [`TicketError::NotFound`] so callers branch on
    /// it the same way for live and replayed providers.
    #[must_use]
    pub fn from_recorded(kind: ErrorKind, message: String) -> Self {
        match kind {
            ErrorKind::NotFound => Self::NotFound,
            kind => Self::Replayed { kind, message },
        }
    }
}
