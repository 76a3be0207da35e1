//! Command-line interface for the Roamsignal recommendation engine.
//!
//! The CLI loads the prepared artifacts (operator dataset CSV and fitted
//! maturity bundle), runs a single recommendation request, and prints the
//! ranked operators as JSON. Paths and request parameters can come from CLI
//! flags, configuration files, or `ROAMSIGNAL_*` environment variables.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;
mod regions;
#[cfg(test)]
mod tests;

pub use error::CliError;
use recommend::{RecommendArgs, run_recommend};
use regions::{RegionsArgs, run_regions};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_BUNDLE: &str = "bundle";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_PRIORITY: &str = "priority";
pub(crate) const ARG_ITINERARY: &str = "itinerary";
pub(crate) const ARG_DELIMITER: &str = "delimiter";
pub(crate) const ENV_RECOMMEND_DATASET: &str = "ROAMSIGNAL_CMDS_RECOMMEND_DATASET";
pub(crate) const ENV_RECOMMEND_BUNDLE: &str = "ROAMSIGNAL_CMDS_RECOMMEND_BUNDLE";
pub(crate) const ENV_RECOMMEND_REGION: &str = "ROAMSIGNAL_CMDS_RECOMMEND_REGION";
pub(crate) const ENV_REGIONS_DATASET: &str = "ROAMSIGNAL_CMDS_REGIONS_DATASET";

/// Run the Roamsignal CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Regions(args) => run_regions(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roamsignal",
    about = "Rank mobile operators for a traveller's region, priority, and route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank operators for a region, priority, and itinerary.
    Recommend(RecommendArgs),
    /// List the regions available for selection.
    Regions(RegionsArgs),
}

/// Resolve the configured delimiter character into the single byte the CSV
/// decoder expects.
pub(crate) fn delimiter_byte(value: Option<char>) -> Result<u8, CliError> {
    value.map_or(Ok(b';'), |ch| {
        u8::try_from(u32::from(ch)).map_err(|_| CliError::InvalidDelimiter { value: ch })
    })
}
