//! Ticket provider port: the four operations the host calls.

use std::future::Future;
use std::pin::Pin;

use crate::error::TicketError;
use crate::schema::{CreateTicketInput, Ticket, TicketQuery, UpdateTicketInput};

/// Boxed future type alias used by [`TicketProvider`] to keep the trait dyn-compatible.
pub type TicketFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TicketError>> + Send + 'a>>;

/// Creates, reads, searches and updates tickets in an external tracker.
///
/// Implementations run their requests sequentially on the calling task and
/// hold no mutable state, so one instance can serve concurrent callers.
pub trait TicketProvider: Send + Sync {
    /// Lists tickets matching `query`, in tracker order.
    ///
    /// # Errors
    ///
    /// Returns an error if the search request fails or its response cannot be decoded.
    fn query<'a>(&'a self, query: &'a TicketQuery) -> TicketFuture<'a, Vec<Ticket>>;

    /// Fetches one ticket by id or key.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::NotFound`] if the ticket does not exist.
    fn get<'a>(&'a self, id: &'a str) -> TicketFuture<'a, Ticket>;

    /// Creates a ticket and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker rejects the ticket.
    fn create<'a>(&'a self, input: &'a CreateTicketInput) -> TicketFuture<'a, Ticket>;

    /// Applies `input` to a ticket and returns the updated ticket.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::NotFound`] if the ticket does not exist and
    /// [`TicketError::TransitionNotFound`] if the requested status cannot be reached.
    fn update<'a>(
        &'a self,
        id: &'a str,
        input: &'a UpdateTicketInput,
    ) -> TicketFuture<'a, Ticket>;
}
