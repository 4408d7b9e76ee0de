//! Live adapters that talk to real external systems.

pub mod jira;

pub use jira::JiraProvider;
