//! Adapter implementations of the port traits.
//!
//! `live` talks to Jira, `recording` wraps a live adapter and captures each
//! call to a cassette, `replaying` serves calls back from one.

pub mod live;
pub mod recording;
pub mod replaying;
