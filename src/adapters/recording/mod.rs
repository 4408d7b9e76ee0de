//! Recording adapters that capture provider calls to cassettes.

pub mod tickets;

pub use tickets::RecordingTicketProvider;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::format::RecordedError;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::TicketError;

/// Record a provider result using the Ok/Err JSON convention.
///
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": {"kind": ..., "message": e.to_string()}}`
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    method: &str,
    input: &I,
    result: &Result<T, TicketError>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = to_recorded_value(method, "input", input);
    let output_json = match result {
        Ok(v) => json!({ "Ok": to_recorded_value(method, "output", v) }),
        Err(e) => json!({ "Err": RecordedError::from(e) }),
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(method, input_json, output_json);
}

/// Serializes a recorded value; failures are logged and stored as `null`.
fn to_recorded_value<T: Serialize>(method: &str, part: &str, value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        tracing::warn!(method, part, error = %err, "could not serialize recorded value");
        Value::Null
    })
}
