//! Error types emitted by the MixMaster CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mixmaster_core::CatalogLoadError;
use mixmaster_protocol::ProtocolError;
use mixmaster_scorer::ScoringConfigError;
use thiserror::Error;

/// Errors emitted by the MixMaster CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The scoring tunables were rejected.
    #[error("invalid scoring configuration: {0}")]
    Scoring(#[from] ScoringConfigError),
    /// Loading the catalog source failed.
    #[error("failed to load catalog: {0}")]
    LoadCatalog(#[source] Box<CatalogLoadError>),
    /// Reading the request file failed.
    #[error("failed to read request at {path:?}: {source}")]
    ReadRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the request from standard input failed.
    #[error("failed to read request from stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
    /// The request broke the protocol grammar.
    #[error("invalid request: {0}")]
    Protocol(#[from] ProtocolError),
    /// Serializing the JSON report failed.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing to stdout or stderr failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// The logging subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<CatalogLoadError> for CliError {
    fn from(source: CatalogLoadError) -> Self {
        Self::LoadCatalog(Box::new(source))
    }
}
