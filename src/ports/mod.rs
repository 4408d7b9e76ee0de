//! Port traits defining external boundaries.
//!
//! The ticket tracker is the only boundary; implementations live in
//! `src/adapters/` (live, recording, replaying).

pub mod tickets;

pub use tickets::{TicketFuture, TicketProvider};
