//! Replaying adapters that serve recorded interactions.

pub mod tickets;

pub use tickets::ReplayingTicketProvider;

use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cassette::format::RecordedError;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::TicketError;

/// Take the recorded output of the next `method` call.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    method: &str,
) -> Result<Value, TicketError> {
    let mut guard = replayer.lock().unwrap_or_else(PoisonError::into_inner);
    guard.next_interaction(method).map(|interaction| interaction.output.clone())
}

/// Decode a recorded `{"Ok": v}` / `{"Err": e}` output back into a result.
pub(crate) fn replay_result<T: DeserializeOwned>(output: Value) -> Result<T, TicketError> {
    let Value::Object(mut map) = output else {
        return Err(TicketError::Cassette { message: "output is not an object".into() });
    };
    if let Some(ok) = map.remove("Ok") {
        return serde_json::from_value(ok)
            .map_err(|source| TicketError::Decode { context: "decode recorded output", source });
    }
    if let Some(err) = map.remove("Err") {
        let recorded: RecordedError = serde_json::from_value(err)
            .map_err(|source| TicketError::Decode { context: "decode recorded error", source })?;
        return Err(recorded.into());
    }
    Err(TicketError::Cassette { message: "output has neither Ok nor Err".into() })
}
