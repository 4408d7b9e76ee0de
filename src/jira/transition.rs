//! Workflow transition lookup.
//!
//! A status change is a two-request exchange: list the transitions legal
//! for the issue right now, then apply the one whose destination status
//! matches. This module owns the selection step and the request body; the
//! HTTP exchange lives in the live adapter.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::TicketError;

/// Response of `GET /issue/{id}/transitions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitionList {
    /// Transitions in server order.
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// One transition currently available for an issue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transition {
    /// Transition identifier used when applying it.
    #[serde(default)]
    pub id: String,
    /// Display name of the transition itself (e.g. "Start progress").
    #[serde(default)]
    pub name: String,
    /// Destination status.
    #[serde(default)]
    pub to: TransitionTarget,
}

/// Destination status of a [`Transition`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitionTarget {
    /// Status name.
    #[serde(default)]
    pub name: String,
}

impl TransitionList {
    /// Picks the first transition whose destination status equals `status`,
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::TransitionNotFound`] when nothing leads there.
    pub fn resolve(&self, status: &str) -> Result<&Transition, TicketError> {
        let wanted = status.to_lowercase();
        self.transitions
            .iter()
            .find(|t| t.to.name.to_lowercase() == wanted)
            .ok_or_else(|| TicketError::TransitionNotFound { status: status.to_string() })
    }
}

/// Body for `POST /issue/{id}/transitions`.
#[must_use]
pub fn transition_payload(transition_id: &str) -> Value {
    json!({ "transition": { "id": transition_id } })
}
