//! Request bodies for issue create and field update.

use serde_json::{json, Map, Value};

use crate::schema::{CreateTicketInput, FieldValue, Fields, UpdateTicketInput};

/// Wraps plain text in a single-paragraph Atlassian Document Format document.
#[must_use]
pub fn adf_document(text: &str) -> Value {
    json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "paragraph",
            "content": [{ "type": "text", "text": text }],
        }],
    })
}

/// Builds the body for `POST /issue`.
///
/// The issue is scoped to `project_key` and typed as `issue_type`; extra
/// fields may override either.
#[must_use]
pub fn create_payload(input: &CreateTicketInput, project_key: &str, issue_type: &str) -> Value {
    let mut fields = Map::new();
    fields.insert("project".into(), json!({ "key": project_key }));
    fields.insert("summary".into(), Value::String(input.title.clone()));
    fields.insert("issuetype".into(), json!({ "name": issue_type }));
    if !input.description.is_empty() {
        fields.insert("description".into(), adf_document(&input.description));
    }
    apply_extra_fields(&mut fields, &input.fields);
    json!({ "fields": fields })
}

/// Builds the `fields` object for `PUT /issue/{id}`.
///
/// Only fields set on `input` are present. Status is never included; it
/// goes through a transition instead. An empty result means no field update
/// is needed.
#[must_use]
pub fn update_fields(input: &UpdateTicketInput) -> Map<String, Value> {
    let mut fields = Map::new();
    if let Some(title) = &input.title {
        fields.insert("summary".into(), Value::String(title.clone()));
    }
    if let Some(description) = &input.description {
        // An empty description clears the field.
        let body = if description.is_empty() { Value::Null } else { adf_document(description) };
        fields.insert("description".into(), body);
    }
    // Single-assignee tracker: the first entry wins, an empty list changes nothing.
    if let Some(first) = input.assignees.as_ref().and_then(|a| a.first()) {
        fields.insert("assignee".into(), json!({ "accountId": first }));
    }
    if let Some(extra) = &input.fields {
        apply_extra_fields(&mut fields, extra);
    }
    fields
}

/// Merges an extra-fields dictionary into `fields`.
///
/// `priority`, `labels` and `components` are reshaped into the API's object
/// forms; any other key, or a known key whose value has an unexpected shape,
/// is copied verbatim and overwrites whatever was already set. An empty
/// `priority` string is ignored.
pub fn apply_extra_fields(fields: &mut Map<String, Value>, extra: &Fields) {
    for (key, value) in extra {
        if key == "priority" && matches!(value, FieldValue::Text(name) if name.is_empty()) {
            continue;
        }
        let shaped = match key.as_str() {
            "priority" => value.non_empty_text().map(|name| json!({ "name": name })),
            "labels" => value.string_list().map(|labels| json!(labels)),
            "components" => value.string_list().map(|names| {
                Value::Array(names.into_iter().map(|name| json!({ "name": name })).collect())
            }),
            _ => None,
        };
        fields.insert(key.clone(), shaped.unwrap_or_else(|| value.to_json()));
    }
}
