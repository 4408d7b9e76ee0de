//! Replaying adapter for the `TicketProvider` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::tickets::{TicketFuture, TicketProvider};
use crate::schema::{CreateTicketInput, Ticket, TicketQuery, UpdateTicketInput};

/// Serves recorded provider results from a cassette.
///
/// Arguments are ignored; each method returns its recorded outputs in order.
pub struct ReplayingTicketProvider {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingTicketProvider {
    /// Create a replaying provider backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl TicketProvider for ReplayingTicketProvider {
    fn query<'a>(&'a self, _query: &'a TicketQuery) -> TicketFuture<'a, Vec<Ticket>> {
        let output = next_output(&self.replayer, "query");
        Box::pin(async move { replay_result(output?) })
    }

    fn get<'a>(&'a self, _id: &'a str) -> TicketFuture<'a, Ticket> {
        let output = next_output(&self.replayer, "get");
        Box::pin(async move { replay_result(output?) })
    }

    fn create<'a>(&'a self, _input: &'a CreateTicketInput) -> TicketFuture<'a, Ticket> {
        let output = next_output(&self.replayer, "create");
        Box::pin(async move { replay_result(output?) })
    }

    fn update<'a>(
        &'a self,
        _id: &'a str,
        _input: &'a UpdateTicketInput,
    ) -> TicketFuture<'a, Ticket> {
        let output = next_output(&self.replayer, "update");
        Box::pin(async move { replay_result(output?) })
    }
}
