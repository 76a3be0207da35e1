//! Regions command implementation for the Roamsignal CLI.
//!
//! Prints the sorted region index so a selection input can be populated
//! without running a recommendation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roamsignal_data::{Dataset, DatasetFormat, read_dataset};
use serde::{Deserialize, Serialize};

use crate::recommend::require_existing;
use crate::{ARG_DATASET, ARG_DELIMITER, CliError, ENV_REGIONS_DATASET, delimiter_byte};

/// CLI arguments for the `regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the regions available for selection")]
#[ortho_config(prefix = "ROAMSIGNAL")]
pub(crate) struct RegionsArgs {
    /// Path to the operator dataset CSV.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Dataset field delimiter.
    #[arg(long = ARG_DELIMITER, value_name = "char")]
    #[serde(default)]
    pub(crate) delimiter: Option<char>,
}

impl RegionsArgs {
    fn into_config(self) -> Result<RegionsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RegionsConfig::try_from(merged)
    }
}

/// Resolved `regions` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegionsConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) delimiter: u8,
}

impl TryFrom<RegionsArgs> for RegionsConfig {
    type Error = CliError;

    fn try_from(args: RegionsArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_REGIONS_DATASET,
        })?;
        let delimiter = delimiter_byte(args.delimiter)?;
        Ok(Self { dataset, delimiter })
    }
}

pub(super) fn run_regions(args: RegionsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_regions_with(args, &mut stdout)
}

pub(crate) fn run_regions_with(args: RegionsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.dataset, ARG_DATASET)?;
    let regions = execute_regions(&config)?;
    serde_json::to_writer_pretty(&mut *writer, &regions).map_err(CliError::SerializeOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

pub(crate) fn execute_regions(config: &RegionsConfig) -> Result<Vec<String>, CliError> {
    let format = DatasetFormat {
        delimiter: config.delimiter,
    };
    let rows = read_dataset(&config.dataset, format)?;
    let dataset = Dataset::from_raw(rows);
    Ok(dataset.regions().as_slice().to_vec())
}
