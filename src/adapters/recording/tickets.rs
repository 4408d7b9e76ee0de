//! Recording adapter for the `TicketProvider` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::tickets::{TicketFuture, TicketProvider};
use crate::schema::{CreateTicketInput, Ticket, TicketQuery, UpdateTicketInput};

/// Records provider calls while delegating to an inner implementation.
///
/// Inputs are recorded in the same shape as the plugin's request payloads.
pub struct RecordingTicketProvider {
    inner: Box<dyn TicketProvider>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTicketProvider {
    /// Creates a new recording provider wrapping the given implementation.
    pub fn new(inner: Box<dyn TicketProvider>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl TicketProvider for RecordingTicketProvider {
    fn query<'a>(&'a self, query: &'a TicketQuery) -> TicketFuture<'a, Vec<Ticket>> {
        Box::pin(async move {
            let result = self.inner.query(query).await;
            record_result(&self.recorder, "query", query, &result);
            result
        })
    }

    fn get<'a>(&'a self, id: &'a str) -> TicketFuture<'a, Ticket> {
        Box::pin(async move {
            let result = self.inner.get(id).await;
            record_result(&self.recorder, "get", &json!({ "id": id }), &result);
            result
        })
    }

    fn create<'a>(&'a self, input: &'a CreateTicketInput) -> TicketFuture<'a, Ticket> {
        Box::pin(async move {
            let result = self.inner.create(input).await;
            record_result(&self.recorder, "create", input, &result);
            result
        })
    }

    fn update<'a>(
        &'a self,
        id: &'a str,
        input: &'a UpdateTicketInput,
    ) -> TicketFuture<'a, Ticket> {
        Box::pin(async move {
            let result = self.inner.update(id, input).await;
            record_result(&self.recorder, "update", &json!({ "id": id, "input": input }), &result);
            result
        })
    }
}
