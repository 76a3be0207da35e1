//! Error types raised while materializing the dataset.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or decoding the operator dataset.
///
/// All variants are configuration errors and abort initialization; a
/// well-formed table never errors past this point.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    /// Reading the dataset file failed.
    #[error("failed to read dataset at {path}")]
    ReadFile {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding the header row failed.
    #[error("failed to decode dataset headers")]
    Headers {
        /// Source error from the CSV decoder.
        #[source]
        source: csv::Error,
    },
    /// Decoding a data row failed.
    #[error("failed to decode dataset row")]
    Row {
        /// Source error from the CSV decoder.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("dataset is missing expected column {header:?}")]
    MissingColumn {
        /// Raw header name that could not be found.
        header: &'static str,
    },
}
