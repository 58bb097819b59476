//! Command-line interface for the MixMaster recommendation engine.
//!
//! `mixmaster query` answers one protocol request against a catalog file and
//! `mixmaster catalog` validates a catalog and lists its cocktails. Options
//! layer through `ortho_config`: CLI flags win over `MIXMASTER_*` environment
//! variables, which win over configuration files and defaults.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod query;
mod telemetry;

pub use error::CliError;

use catalog::{CatalogArgs, run_catalog};
use query::{QueryArgs, run_query};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_SPIRIT_WEIGHT: &str = "spirit-weight";
pub(crate) const ARG_FLAVOR_WEIGHT: &str = "flavor-weight";
pub(crate) const ARG_SKILL_WEIGHT: &str = "skill-weight";
pub(crate) const ARG_STRENGTH_WEIGHT: &str = "strength-weight";
pub(crate) const ARG_OCCASION_WEIGHT: &str = "occasion-weight";
pub(crate) const ARG_SEASON_WEIGHT: &str = "season-weight";
pub(crate) const ARG_TOLERANCE_BAND: &str = "tolerance-band";
pub(crate) const ARG_RESULT_CAP: &str = "result-cap";
pub(crate) const ENV_QUERY_CATALOG: &str = "MIXMASTER_CMDS_QUERY_CATALOG";
pub(crate) const ENV_CATALOG_CATALOG: &str = "MIXMASTER_CMDS_CATALOG_CATALOG";

/// Run the MixMaster CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the catalog or the
/// request are invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    telemetry::init()?;
    match cli.command {
        Command::Query(args) => run_query(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mixmaster",
    about = "Rank cocktails against stated drinking preferences",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Answer a recommend or browseAll request.
    Query(QueryArgs),
    /// Validate a catalog file and list its cocktails.
    Catalog(CatalogArgs),
}

/// Check that a configured input path names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match mixmaster_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
