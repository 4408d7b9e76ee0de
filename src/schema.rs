//! Provider-neutral ticket types exchanged with the host.
//!
//! These mirror the host's ticket contract: field names serialize in
//! camelCase and every optional field may be omitted on the wire.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Provider-specific side-channel attached to a [`Ticket`].
pub type Metadata = BTreeMap<String, Value>;

/// Extra fields supplied on create/update, keyed by external field name.
pub type Fields = BTreeMap<String, FieldValue>;

/// A ticket in the unified representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    /// Stable identifier assigned by the external system.
    pub id: String,
    /// Human-readable key (e.g. `PROJ-42`).
    pub key: String,
    /// One-line summary.
    pub title: String,
    /// Plain-text description.
    pub description: String,
    /// Current workflow status name.
    pub status: String,
    /// Assignee identifiers; at most one entry for single-assignee trackers.
    pub assignees: Vec<String>,
    /// Reporter identifier, empty when unknown.
    pub reporter: String,
    /// Creation time, `None` when missing or unparseable.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time, `None` when missing or unparseable.
    pub updated_at: Option<DateTime<Utc>>,
    /// Provider-specific fields.
    pub metadata: Metadata,
}

/// Filter for listing tickets. Every field is optional.
///
/// Absent and `null` fields both mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketQuery {
    /// Free-text search.
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    /// Status names to match (any of).
    #[serde(deserialize_with = "null_as_default")]
    pub statuses: Vec<String>,
    /// Assignee identifiers to match (any of).
    #[serde(deserialize_with = "null_as_default")]
    pub assignees: Vec<String>,
    /// Reporter identifier to match.
    #[serde(deserialize_with = "null_as_default")]
    pub reporter: String,
    /// Maximum number of results; zero or negative means the provider default.
    #[serde(deserialize_with = "null_as_default")]
    pub limit: i64,
}

/// Input for creating a ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketInput {
    /// Ticket summary.
    pub title: String,
    /// Plain-text description; empty means none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Provider-specific extras.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Fields,
}

/// Input for updating a ticket.
///
/// `None` means "leave unchanged". `Some(vec![])` for assignees is
/// distinguishable from `None` but is currently treated as a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTicketInput {
    /// New summary.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Target workflow status name, applied through a transition.
    pub status: Option<String>,
    /// New assignees; only the first entry is applied.
    pub assignees: Option<Vec<String>>,
    /// Provider-specific extras.
    pub fields: Option<Fields>,
}

/// A value in an extra-fields dictionary.
///
/// Lists arrive either already typed as strings or as arbitrary JSON
/// values; [`FieldValue::string_list`] coerces both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A plain string.
    Text(String),
    /// A list whose elements are all strings.
    TextList(Vec<String>),
    /// A list with arbitrary elements.
    List(Vec<Value>),
    /// Any other JSON value, passed through untouched.
    Other(Value),
}

impl FieldValue {
    /// Returns the value as a list of strings, or `None` when it is not a list.
    ///
    /// Non-string elements of an untyped list become empty strings.
    #[must_use]
    pub fn string_list(&self) -> Option<Vec<String>> {
        match self {
            Self::TextList(items) => Some(items.clone()),
            Self::List(items) => Some(
                items.iter().map(|item| item.as_str().unwrap_or_default().to_string()).collect(),
            ),
            Self::Text(_) | Self::Other(_) => None,
        }
    }

    /// Returns the value as a non-empty string, or `None`.
    #[must_use]
    pub fn non_empty_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Converts the value into plain JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::TextList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            Self::List(items) => Value::Array(items.clone()),
            Self::Other(value) => value.clone(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) if items.iter().all(Value::is_string) => Self::TextList(
                items.into_iter().filter_map(|v| v.as_str().map(str::to_string)).collect(),
            ),
            Value::Array(items) => Self::List(items),
            other => Self::Other(other),
        }
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
