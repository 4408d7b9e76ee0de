//! Jira ticket provider for the host's ticket capability.
//!
//! The library exposes the provider itself ([`adapters::live::JiraProvider`])
//! behind the [`ports::TicketProvider`] trait, plus the JSON-RPC loop the
//! `ticketplugin` binary runs over stdin/stdout.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod jira;
pub mod logging;
pub mod plugin;
pub mod ports;
pub mod schema;

use clap::Parser;

/// Provider name the host registers this adapter under.
pub const PROVIDER_NAME: &str = "jira";

/// Version of this adapter, also stamped into recorded cassettes.
pub const ADAPTER_VERSION: &str = "0.1.0";

/// Host versions this adapter works with.
pub const REQUIRES_CORE: &str = ">=0.1.0";

/// Run the plugin with the provided arguments, serving stdin until it closes.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the replay cassette
/// cannot be loaded, or stdout/the recorded cassette cannot be written.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    logging::init_tracing(&cli.log_level);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to start async runtime: {err}"))?;

    let mut plugin = plugin::Plugin::new(cli.mode())?;
    tracing::debug!(provider = PROVIDER_NAME, methods = ?plugin::METHODS, "serving stdin");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    plugin::serve(stdin, stdout, &mut plugin, &runtime)
        .map_err(|err| format!("Failed to write response: {err}"))?;

    if let Some(path) = plugin.finish().map_err(|err| format!("Failed to write cassette: {err}"))? {
        tracing::info!(path = %path.display(), "cassette written");
    }
    Ok(())
}
