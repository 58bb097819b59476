//! Logging setup for the binary.
//!
//! Library crates log through the `log` facade; the fmt subscriber installed
//! here bridges those records and writes them to stderr so stdout carries
//! only report text.

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Environment variable holding the `EnvFilter` directives.
pub(crate) const LOG_ENV: &str = "MIXMASTER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Build the filter from [`LOG_ENV`], falling back to warnings only.
pub(crate) fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
pub(crate) fn init() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(CliError::Telemetry)
}
