//! Recommend command implementation for the Roamsignal CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roamsignal_core::{RankedOperator, RecommendRequest, Recommender};
use roamsignal_data::{Dataset, DatasetFormat, read_dataset};
use roamsignal_scorer::{RecommendationEngine, load_maturity_file};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_BUNDLE, ARG_DATASET, ARG_DELIMITER, ARG_ITINERARY, ARG_PRIORITY, ARG_REGION, CliError,
    ENV_RECOMMEND_BUNDLE, ENV_RECOMMEND_DATASET, ENV_RECOMMEND_REGION, delimiter_byte,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank operators by loading the operator dataset and the \
                 fitted maturity bundle, then scoring the requested region \
                 against the traveller's priority and itinerary. Paths and \
                 parameters can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "Rank operators for a region, priority, and itinerary"
)]
#[ortho_config(prefix = "ROAMSIGNAL")]
pub(crate) struct RecommendArgs {
    /// Path to the operator dataset CSV.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to the fitted maturity bundle (`maturity.bin`).
    #[arg(long = ARG_BUNDLE, value_name = "path")]
    #[serde(default)]
    pub(crate) bundle: Option<Utf8PathBuf>,
    /// Region to filter candidates to.
    #[arg(long = ARG_REGION, value_name = "name")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Traveller priority: coverage, 4g, 5g, or overall.
    #[arg(long = ARG_PRIORITY, value_name = "priority")]
    #[serde(default)]
    pub(crate) priority: Option<String>,
    /// Comma-separated itinerary waypoints.
    #[arg(long = ARG_ITINERARY, value_name = "waypoints")]
    #[serde(default)]
    pub(crate) itinerary: Option<String>,
    /// Dataset field delimiter.
    #[arg(long = ARG_DELIMITER, value_name = "char")]
    #[serde(default)]
    pub(crate) delimiter: Option<char>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the dataset CSV.
    pub(crate) dataset: Utf8PathBuf,
    /// Path to the maturity bundle.
    pub(crate) bundle: Utf8PathBuf,
    /// Requested region.
    pub(crate) region: String,
    /// Raw priority text; unrecognized values fall back to "overall".
    pub(crate) priority: String,
    /// Raw itinerary text; may be empty.
    pub(crate) itinerary: String,
    /// Dataset delimiter byte.
    pub(crate) delimiter: u8,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)?;
        require_existing(&self.bundle, ARG_BUNDLE)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_RECOMMEND_DATASET,
        })?;
        let bundle = args.bundle.ok_or(CliError::MissingArgument {
            field: ARG_BUNDLE,
            env: ENV_RECOMMEND_BUNDLE,
        })?;
        let region = args.region.ok_or(CliError::MissingArgument {
            field: ARG_REGION,
            env: ENV_RECOMMEND_REGION,
        })?;
        let delimiter = delimiter_byte(args.delimiter)?;
        Ok(Self {
            dataset,
            bundle,
            region,
            priority: args.priority.unwrap_or_else(|| "overall".to_owned()),
            itinerary: args.itinerary.unwrap_or_default(),
            delimiter,
        })
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.as_std_path().is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let results = execute_recommend(&config)?;
    write_results(writer, &results)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
) -> Result<Vec<RankedOperator>, CliError> {
    let format = DatasetFormat {
        delimiter: config.delimiter,
    };
    let rows = read_dataset(&config.dataset, format)?;
    let dataset = Dataset::from_raw(rows);
    let bundle = load_maturity_file(&config.bundle)?;
    let (records, _regions) = dataset.into_parts();
    let engine = RecommendationEngine::from_bundle(records, bundle);
    let request = RecommendRequest::new(
        config.region.clone(),
        &config.priority,
        config.itinerary.clone(),
    );
    Ok(engine.recommend(&request))
}

pub(crate) fn write_results(
    writer: &mut dyn Write,
    results: &[RankedOperator],
) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, results).map_err(CliError::SerializeOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
