//! Error types emitted by the Roamsignal CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use roamsignal_data::DatasetError;
use roamsignal_scorer::MaturityBundleError;
use thiserror::Error;

/// Errors emitted by the Roamsignal CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path that failed validation.
        path: Utf8PathBuf,
    },
    /// The configured delimiter cannot be expressed as a single byte.
    #[error("dataset delimiter {value:?} is not a single-byte character")]
    InvalidDelimiter {
        /// Character supplied by the caller.
        value: char,
    },
    /// Loading or decoding the dataset failed.
    #[error("failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),
    /// Loading or validating the maturity bundle failed.
    #[error("failed to load maturity bundle: {0}")]
    Bundle(#[from] MaturityBundleError),
    /// Serializing the output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
