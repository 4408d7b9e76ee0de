//! Raw issue models and their conversion into [`Ticket`].
//!
//! Every nested field in the REST representation may be missing or `null`,
//! so the raw structs are made of `Option`s and conversion never fails.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::schema::{Metadata, Ticket};

/// An issue as returned by `GET /issue/{id}` and the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraIssue {
    /// Numeric identifier.
    #[serde(default)]
    pub id: String,
    /// Issue key.
    #[serde(default)]
    pub key: String,
    /// Field values.
    #[serde(default)]
    pub fields: IssueFields,
}

/// The `fields` object of an issue.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssueFields {
    /// Summary line.
    pub summary: Option<String>,
    /// Description as an ADF document.
    pub description: Option<AdfDocument>,
    /// Workflow status.
    pub status: Option<Named>,
    /// Current assignee.
    pub assignee: Option<JiraUser>,
    /// Reporter.
    pub reporter: Option<JiraUser>,
    /// Priority.
    pub priority: Option<IdName>,
    /// Issue type.
    #[serde(rename = "issuetype")]
    pub issue_type: Option<IssueType>,
    /// Labels.
    pub labels: Option<Vec<String>>,
    /// Components.
    pub components: Option<Vec<IdName>>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Last update timestamp.
    pub updated: Option<String>,
}

/// Top level of an Atlassian Document Format tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdfDocument {
    /// Content blocks (paragraphs, headings, ...).
    pub content: Option<Vec<AdfBlock>>,
}

/// A block inside an ADF document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdfBlock {
    /// Inline nodes of the block.
    pub content: Option<Vec<AdfNode>>,
}

/// An inline ADF node; only text nodes carry `text`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdfNode {
    /// Text of a text node.
    pub text: Option<String>,
}

/// An object with just a name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Named {
    /// Name.
    pub name: Option<String>,
}

/// An object with an id and a name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdName {
    /// Identifier.
    pub id: Option<String>,
    /// Name.
    pub name: Option<String>,
}

/// Issue type details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssueType {
    /// Identifier.
    pub id: Option<String>,
    /// Name (e.g. "Bug").
    pub name: Option<String>,
    /// Description, often empty.
    pub description: Option<String>,
}

/// A user reference (assignee or reporter).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JiraUser {
    /// Account identifier.
    pub account_id: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
}

/// Response of the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Matching issues in server order.
    pub issues: Option<Vec<JiraIssue>>,
}

/// Response of `POST /issue`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatedIssue {
    /// Identifier of the new issue.
    pub id: String,
    /// Key of the new issue.
    pub key: String,
    /// REST URL of the new issue.
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Converts a raw issue into a [`Ticket`], stamping `source` into metadata.
#[must_use]
pub fn convert_issue(issue: JiraIssue, source: &str) -> Ticket {
    let fields = issue.fields;
    let mut metadata = Metadata::new();
    metadata.insert("source".into(), json!(source));

    let mut assignees = Vec::new();
    if let Some(user) = fields.assignee {
        assignees.push(user.account_id.unwrap_or_default());
        metadata.insert("assignee_name".into(), json!(user.display_name.unwrap_or_default()));
    }

    let mut reporter = String::new();
    if let Some(user) = fields.reporter {
        reporter = user.account_id.unwrap_or_default();
        metadata.insert("reporter_name".into(), json!(user.display_name.unwrap_or_default()));
    }

    if let Some(priority) = fields.priority {
        metadata.insert("priority".into(), json!(priority.name.unwrap_or_default()));
        metadata.insert("priority_id".into(), json!(priority.id.unwrap_or_default()));
    }

    let issue_type = fields.issue_type.unwrap_or_default();
    metadata.insert("issue_type".into(), json!(issue_type.name.unwrap_or_default()));
    metadata.insert("issue_type_id".into(), json!(issue_type.id.unwrap_or_default()));
    if let Some(description) = issue_type.description.filter(|d| !d.is_empty()) {
        metadata.insert("issue_type_description".into(), json!(description));
    }

    if let Some(labels) = fields.labels.filter(|l| !l.is_empty()) {
        metadata.insert("labels".into(), json!(labels));
    }

    if let Some(components) = fields.components.filter(|c| !c.is_empty()) {
        let names: Vec<Value> =
            components.iter().map(|c| json!(c.name.clone().unwrap_or_default())).collect();
        let details: Vec<Value> = components
            .into_iter()
            .map(|c| json!({ "id": c.id.unwrap_or_default(), "name": c.name.unwrap_or_default() }))
            .collect();
        metadata.insert("components".into(), Value::Array(names));
        metadata.insert("component_details".into(), Value::Array(details));
    }

    Ticket {
        id: issue.id,
        key: issue.key,
        title: fields.summary.unwrap_or_default(),
        description: fields.description.as_ref().map(flatten_adf).unwrap_or_default(),
        status: fields.status.and_then(|s| s.name).unwrap_or_default(),
        assignees,
        reporter,
        created_at: fields.created.as_deref().and_then(parse_timestamp),
        updated_at: fields.updated.as_deref().and_then(parse_timestamp),
        metadata,
    }
}

/// Flattens a two-level ADF tree into plain text.
///
/// Non-empty text nodes are joined by a single space in document order.
#[must_use]
pub fn flatten_adf(document: &AdfDocument) -> String {
    document
        .content
        .iter()
        .flatten()
        .flat_map(|block| block.content.iter().flatten())
        .filter_map(|node| node.text.as_deref())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses an RFC 3339 timestamp, falling back to Jira's `+0000` offset form.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
}
