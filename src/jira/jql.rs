//! Compiles a [`TicketQuery`] into JQL.
//!
//! Clause order is fixed (project, text, status, assignee, reporter) and the
//! result always ends with `ORDER BY key DESC`, so the same query compiles to
//! the same string every time.

use crate::schema::TicketQuery;

const ORDER_SUFFIX: &str = " ORDER BY key DESC";

/// Builds the JQL string for `query`, scoped to `project_key`.
#[must_use]
pub fn build_jql(query: &TicketQuery, project_key: &str) -> String {
    let mut clauses = vec![format!("project = {project_key}")];

    if !query.query.is_empty() {
        clauses.push(format!("text ~ {}", quoted(&query.query)));
    }
    if !query.statuses.is_empty() {
        clauses.push(format!("status IN ({})", quoted_list(&query.statuses)));
    }
    if !query.assignees.is_empty() {
        clauses.push(format!("assignee IN ({})", quoted_list(&query.assignees)));
    }
    if !query.reporter.is_empty() {
        clauses.push(format!("reporter = {}", quoted(&query.reporter)));
    }

    let mut jql = clauses.join(" AND ");
    jql.push_str(ORDER_SUFFIX);
    jql
}

/// Escapes double quotes for use inside a quoted JQL string. Nothing else is escaped.
#[must_use]
pub fn escape_jql(value: &str) -> String {
    value.replace('"', "\\\"")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_jql(value))
}

fn quoted_list(values: &[String]) -> String {
    values.iter().map(|v| quoted(v)).collect::<Vec<_>>().join(",")
}
