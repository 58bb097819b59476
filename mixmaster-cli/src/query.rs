//! Query command implementation for the MixMaster CLI.

use std::io::{Read, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::info;
use mixmaster_core::Catalog;
use mixmaster_protocol::{Engine, render};
use mixmaster_scorer::{DimensionWeights, Ranker, ScoringConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_FLAVOR_WEIGHT, ARG_FORMAT, ARG_OCCASION_WEIGHT, ARG_REQUEST, ARG_RESULT_CAP,
    ARG_SEASON_WEIGHT, ARG_SKILL_WEIGHT, ARG_SPIRIT_WEIGHT, ARG_STRENGTH_WEIGHT,
    ARG_TOLERANCE_BAND, CliError, ENV_QUERY_CATALOG, require_existing,
};

/// How the query response is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// The block report.
    #[default]
    Text,
    /// The ranked entries as pretty-printed JSON.
    Json,
}

/// CLI arguments for the `query` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Answer one request against a catalog file. The request is \
                 read from the given path, or from stdin when no path is \
                 given. Scoring weights must sum to 100.",
    about = "Answer a recommend or browseAll request"
)]
#[ortho_config(prefix = "MIXMASTER")]
pub(crate) struct QueryArgs {
    /// File holding the request text; stdin when omitted.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the JSON catalog source.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Points for a matching base spirit.
    #[arg(long = ARG_SPIRIT_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) spirit_weight: Option<u8>,
    /// Points for a matching flavour note.
    #[arg(long = ARG_FLAVOR_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) flavor_weight: Option<u8>,
    /// Points when the stated skill covers the recipe.
    #[arg(long = ARG_SKILL_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) skill_weight: Option<u8>,
    /// Points for an exact strength match.
    #[arg(long = ARG_STRENGTH_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) strength_weight: Option<u8>,
    /// Points for a matching occasion.
    #[arg(long = ARG_OCCASION_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) occasion_weight: Option<u8>,
    /// Points for a matching season.
    #[arg(long = ARG_SEASON_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) season_weight: Option<u8>,
    /// Strength distance at which strength stops scoring.
    #[arg(long = ARG_TOLERANCE_BAND, value_name = "steps")]
    #[serde(default)]
    pub(crate) tolerance_band: Option<u8>,
    /// Maximum number of recommendations.
    #[arg(long = ARG_RESULT_CAP, value_name = "count")]
    #[serde(default)]
    pub(crate) result_cap: Option<usize>,
}

impl QueryArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

/// Resolved `query` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryConfig {
    /// Catalog source path.
    pub(crate) catalog: Utf8PathBuf,
    /// Request file, or `None` for stdin.
    pub(crate) request_path: Option<Utf8PathBuf>,
    pub(crate) format: OutputFormat,
    /// Validated scoring tunables.
    pub(crate) scoring: ScoringConfig,
}

impl QueryConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(path) = &self.request_path {
            require_existing(path, ARG_REQUEST)?;
        }
        Ok(())
    }
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_QUERY_CATALOG,
        })?;

        let defaults = ScoringConfig::default();
        let weights = DimensionWeights {
            spirit: args.spirit_weight.unwrap_or(defaults.weights.spirit),
            flavor: args.flavor_weight.unwrap_or(defaults.weights.flavor),
            skill: args.skill_weight.unwrap_or(defaults.weights.skill),
            strength: args.strength_weight.unwrap_or(defaults.weights.strength),
            occasion: args.occasion_weight.unwrap_or(defaults.weights.occasion),
            season: args.season_weight.unwrap_or(defaults.weights.season),
        };
        let scoring = ScoringConfig {
            weights,
            tolerance_band: args.tolerance_band.unwrap_or(defaults.tolerance_band),
            result_cap: args.result_cap.unwrap_or(defaults.result_cap),
        };
        scoring.validate()?;

        Ok(Self {
            catalog,
            request_path: args.request_path,
            format: args.format.unwrap_or_default(),
            scoring,
        })
    }
}

pub(super) fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    run_query_with(args, &mut stdin, &mut stdout, &mut stderr)
}

/// Resolve `args` and answer the request, writing the body to `out` and one
/// `diagnostic:` line per rejected preference to `diagnostics`.
pub(super) fn run_query_with(
    args: QueryArgs,
    input: &mut dyn Read,
    out: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_query_config(args)?;
    execute_query(&config, input, out, diagnostics)
}

fn resolve_query_config(args: QueryArgs) -> Result<QueryConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_query(
    config: &QueryConfig,
    input: &mut dyn Read,
    out: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = Catalog::from_path(&config.catalog)?;
    let ranker = Ranker::from_config(config.scoring)?;
    let engine = Engine::with_ranker(Arc::new(catalog), ranker);
    let text = read_request(config.request_path.as_deref(), input)?;

    let evaluation = engine.evaluate(&text)?;
    info!(
        "answered {:?} request with {} entries",
        evaluation.mode,
        evaluation.entries.len()
    );
    for diagnostic in &evaluation.diagnostics {
        writeln!(diagnostics, "diagnostic: {diagnostic}").map_err(CliError::WriteOutput)?;
    }
    match config.format {
        OutputFormat::Text => out
            .write_all(render(&evaluation.entries, evaluation.mode).as_bytes())
            .map_err(CliError::WriteOutput),
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(&evaluation).map_err(CliError::SerializeReport)?;
            writeln!(out, "{payload}").map_err(CliError::WriteOutput)
        }
    }
}

/// Read the request text from `path`, or from `input` when no path is set.
pub(super) fn read_request(
    path: Option<&Utf8Path>,
    input: &mut dyn Read,
) -> Result<String, CliError> {
    match path {
        Some(path) => {
            mixmaster_fs::read_utf8_to_string(path).map_err(|source| CliError::ReadRequest {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let mut text = String::new();
            input
                .read_to_string(&mut text)
                .map_err(CliError::ReadStdin)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryConfig, CliError> {
    let merged = QueryArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QueryConfig::try_from(merged)
}
