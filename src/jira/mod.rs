//! Translation between the unified ticket schema and the Jira REST API v3.
//!
//! Everything here is pure: no I/O, no clocks. The live adapter in
//! `adapters::live::jira` drives these functions over HTTP.

pub mod jql;
pub mod normalize;
pub mod payload;
pub mod transition;

pub use jql::{build_jql, escape_jql};
pub use normalize::{convert_issue, flatten_adf, JiraIssue};
pub use payload::{adf_document, create_payload, update_fields};
pub use transition::{transition_payload, TransitionList};

/// Result cap used for searches when the query does not set a positive limit.
pub const DEFAULT_MAX_RESULTS: i64 = 50;
