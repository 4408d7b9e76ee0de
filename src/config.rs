//! Provider configuration parsed from the host's flat config map.

use serde_json::{Map, Value};

use crate::error::TicketError;

/// Default `source` label stamped into ticket metadata.
pub const DEFAULT_SOURCE: &str = "jira";
/// Placeholder site used when `apiURL` is not supplied.
pub const DEFAULT_API_URL: &str = "https://your-domain.atlassian.net";
/// Issue type used for new tickets when none is configured.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// How requests authenticate against the REST API.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`.
    Bearer {
        /// API token.
        token: String,
    },
    /// HTTP basic auth with an account email and API token.
    Basic {
        /// Account email.
        email: String,
        /// API token.
        token: String,
    },
}

impl std::fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f.write_str("Bearer"),
            Self::Basic { email, .. } => f.debug_struct("Basic").field("email", email).finish(),
        }
    }
}

/// Validated configuration for one provider instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraConfig {
    /// Label recorded under `metadata.source`.
    pub source: String,
    /// Site URL without a trailing slash.
    pub api_url: String,
    /// Project every query and create is scoped to.
    pub project_key: String,
    /// Issue type name for new tickets.
    pub default_issue_type: String,
    /// Credentials.
    pub auth: AuthScheme,
}

impl JiraConfig {
    /// Parses and validates the host config map.
    ///
    /// Recognised keys are `source`, `apiToken`, `email`, `apiURL`,
    /// `projectKey` and `defaultIssueType`. Values that are not strings are
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::Config`] when the token, project key or API URL
    /// is missing.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, TicketError> {
        let token = trimmed(map, "apiToken");
        if token.is_empty() {
            return Err(TicketError::config("jira apiToken is required"));
        }
        let project_key = trimmed(map, "projectKey");
        if project_key.is_empty() {
            return Err(TicketError::config("jira projectKey is required"));
        }
        let api_url = match map.get("apiURL").and_then(Value::as_str) {
            Some(url) if !url.is_empty() => url.trim().trim_end_matches('/'),
            _ => DEFAULT_API_URL,
        };
        if api_url.is_empty() {
            return Err(TicketError::config("jira apiURL is required"));
        }

        let email = trimmed(map, "email");
        let auth = if email.is_empty() {
            AuthScheme::Bearer { token: token.to_string() }
        } else {
            AuthScheme::Basic { email: email.to_string(), token: token.to_string() }
        };

        Ok(Self {
            source: non_empty_or(map, "source", DEFAULT_SOURCE),
            api_url: api_url.to_string(),
            project_key: project_key.to_string(),
            default_issue_type: non_empty_or(map, "defaultIssueType", DEFAULT_ISSUE_TYPE),
            auth,
        })
    }

    /// Base URL of the REST API (`<apiURL>/rest/api/3`).
    #[must_use]
    pub fn rest_base(&self) -> String {
        format!("{}/rest/api/3", self.api_url)
    }
}

fn trimmed<'a>(map: &'a Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(Value::as_str).map_or("", str::trim)
}

fn non_empty_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    match map.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}
