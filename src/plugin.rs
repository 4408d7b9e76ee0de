//! JSON-RPC plugin loop.
//!
//! The host spawns the binary and writes one request object per call to its
//! stdin: `{"method": ..., "config": {...}, "payload": ...}`. Every request
//! gets exactly one newline-terminated response on stdout, either
//! `{"result": ...}` or `{"error": "..."}`.
//!
//! The provider is built from the config of the first request that yields a
//! valid one and then reused; later configs are ignored. A request that
//! cannot be decoded ends the loop after its error frame, and end of input
//! ends it cleanly.

use std::io::{Read, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::context::ProviderContext;
use crate::error::TicketError;
use crate::ports::tickets::TicketProvider;
use crate::schema::{CreateTicketInput, TicketQuery, UpdateTicketInput};

/// Method names understood by [`Plugin::handle`].
pub const METHODS: [&str; 4] = ["ticket.query", "ticket.get", "ticket.create", "ticket.update"];

/// One request frame.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcRequest {
    /// Method name, e.g. `ticket.get`.
    #[serde(default)]
    pub method: String,
    /// Adapter config; only consulted until a provider has been built.
    #[serde(default)]
    pub config: Option<Map<String, Value>>,
    /// Method arguments.
    #[serde(default)]
    pub payload: Value,
}

/// One response frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Method result on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error text on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RpcResponse {
    /// A successful response.
    #[must_use]
    pub fn result(value: Value) -> Self {
        Self { result: Some(value), error: None }
    }

    /// A failed response carrying the error's display text.
    #[must_use]
    pub fn error(err: &impl std::fmt::Display) -> Self {
        Self { result: None, error: Some(err.to_string()) }
    }
}

/// Failure of a single request.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The method name is not one of [`METHODS`].
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// The payload (or the result) did not match the expected shape.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The provider failed.
    #[error(transparent)]
    Ticket(#[from] TicketError),
}

/// Where the provider's answers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Talk to Jira.
    Live,
    /// Talk to Jira and record every call to the given cassette.
    Record(PathBuf),
    /// Serve every call from the given cassette; request configs are ignored.
    Replay(PathBuf),
}

/// Request handler holding the lazily built provider.
pub struct Plugin {
    mode: Mode,
    context: Option<ProviderContext>,
}

impl Plugin {
    /// Creates a handler for `mode`.
    ///
    /// A replay cassette is loaded up front; live providers wait for the
    /// first request's config.
    ///
    /// # Errors
    ///
    /// Returns an error if the replay cassette cannot be read or parsed.
    pub fn new(mode: Mode) -> Result<Self, String> {
        let context = match &mode {
            Mode::Replay(path) => Some(ProviderContext::replaying(path)?),
            Mode::Live | Mode::Record(_) => None,
        };
        Ok(Self { mode, context })
    }

    fn ensure_context(
        &mut self,
        config: &Map<String, Value>,
    ) -> Result<&ProviderContext, TicketError> {
        let context = match self.context.take() {
            Some(context) => context,
            None => {
                let context = match &self.mode {
                    Mode::Live => ProviderContext::live(config)?,
                    Mode::Record(path) => ProviderContext::recording(config, path)?,
                    Mode::Replay(path) => {
                        ProviderContext::replaying(path).map_err(TicketError::config)?
                    }
                };
                tracing::info!(mode = ?self.mode, "ticket provider initialised");
                context
            }
        };
        Ok(&*self.context.insert(context))
    }

    /// Handles one request, blocking on `runtime` for the provider call.
    pub fn handle(&mut self, request: RpcRequest, runtime: &Runtime) -> RpcResponse {
        let config = request.config.unwrap_or_default();
        let context = match self.ensure_context(&config) {
            Ok(context) => context,
            Err(err) => {
                tracing::warn!(error = %err, "ticket provider construction failed");
                return RpcResponse::error(&err);
            }
        };

        tracing::debug!(method = %request.method, "dispatching request");
        let outcome =
            runtime.block_on(dispatch(context.provider.as_ref(), &request.method, request.payload));
        match outcome {
            Ok(value) => RpcResponse::result(value),
            Err(err) => {
                tracing::warn!(method = %request.method, error = %err, "request failed");
                RpcResponse::error(&err)
            }
        }
    }

    /// Closes the provider, writing the cassette when recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, std::io::Error> {
        match self.context {
            Some(context) => context.finish(),
            None => Ok(None),
        }
    }
}

#[derive(Deserialize)]
struct GetPayload {
    #[serde(default)]
    id: String,
}

#[derive(Deserialize)]
struct UpdatePayload {
    #[serde(default)]
    id: String,
    #[serde(default)]
    input: UpdateTicketInput,
}

async fn dispatch(
    provider: &dyn TicketProvider,
    method: &str,
    payload: Value,
) -> Result<Value, RpcError> {
    let result = match method {
        "ticket.query" => {
            let query: TicketQuery = serde_json::from_value(payload)?;
            serde_json::to_value(provider.query(&query).await?)?
        }
        "ticket.get" => {
            let GetPayload { id } = serde_json::from_value(payload)?;
            serde_json::to_value(provider.get(&id).await?)?
        }
        "ticket.create" => {
            let input: CreateTicketInput = serde_json::from_value(payload)?;
            serde_json::to_value(provider.create(&input).await?)?
        }
        "ticket.update" => {
            let UpdatePayload { id, input } = serde_json::from_value(payload)?;
            serde_json::to_value(provider.update(&id, &input).await?)?
        }
        other => return Err(RpcError::UnknownMethod(other.to_string())),
    };
    Ok(result)
}

/// Reads request frames from `reader` until end of input, answering each on
/// `writer`.
///
/// # Errors
///
/// Returns an error only if writing a response fails.
pub fn serve<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    plugin: &mut Plugin,
    runtime: &Runtime,
) -> Result<(), std::io::Error> {
    let frames = serde_json::Deserializer::from_reader(reader).into_iter::<RpcRequest>();
    for frame in frames {
        match frame {
            Ok(request) => write_frame(&mut writer, &plugin.handle(request, runtime))?,
            Err(err) => {
                tracing::warn!(error = %err, "malformed request frame; stopping");
                return write_frame(&mut writer, &RpcResponse::error(&err));
            }
        }
    }
    tracing::debug!("end of input");
    Ok(())
}

fn write_frame<W: Write>(writer: &mut W, response: &RpcResponse) -> Result<(), std::io::Error> {
    serde_json::to_writer(&mut *writer, response)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
