//! Catalog command: validate a catalog source and list its cocktails.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mixmaster_core::Catalog;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG, CliError, ENV_CATALOG_CATALOG, require_existing};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load and validate a catalog source, then print one \
                 cocktail name per line in catalog order.",
    about = "Validate a catalog and list its cocktails"
)]
#[ortho_config(prefix = "MIXMASTER")]
pub(crate) struct CatalogArgs {
    /// Path to the JSON catalog source.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl CatalogArgs {
    pub(crate) fn into_config(self) -> Result<CatalogConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CatalogConfig::try_from(merged)
    }
}

/// Resolved `catalog` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogConfig {
    pub(crate) catalog: Utf8PathBuf,
}

impl TryFrom<CatalogArgs> for CatalogConfig {
    type Error = CliError;

    fn try_from(args: CatalogArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG_CATALOG,
        })?;
        Ok(Self { catalog })
    }
}

pub(super) fn run_catalog(args: CatalogArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    list_catalog(&config, &mut stdout)
}

pub(super) fn list_catalog(config: &CatalogConfig, out: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.catalog, ARG_CATALOG)?;
    let catalog = Catalog::from_path(&config.catalog)?;
    for cocktail in &catalog {
        writeln!(out, "{}", cocktail.name()).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
