//! Error types raised while loading or validating the maturity bundle.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use roamsignal_core::ClusterId;
use thiserror::Error;

/// Errors raised when the classifier bundle is unreadable or malformed.
///
/// Every variant is fatal at startup. A bundle that validates cannot fail
/// at request time: scoring works only with clusters the bundle itself can
/// produce.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MaturityBundleError {
    /// Reading the bundle artifact failed.
    #[error("failed to read maturity bundle at {path}")]
    ReadFile {
        /// Requested artifact path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding the bundle artifact failed.
    #[error("failed to decode maturity bundle at {path}")]
    Decode {
        /// Requested artifact path.
        path: Utf8PathBuf,
        /// Source error from `bincode`.
        #[source]
        source: bincode::Error,
    },
    /// The bundle names no feature columns.
    #[error("maturity bundle lists no feature columns")]
    NoFeatureColumns,
    /// The bundle carries no centroids.
    #[error("maturity bundle carries no centroids")]
    NoCentroids,
    /// The bundle carries no cluster scores.
    #[error("maturity bundle carries no cluster scores")]
    NoClusterScores,
    /// A centroid's arity disagrees with the feature-column list.
    #[error("centroid for cluster {cluster} has {found} values but the bundle names {expected} feature columns")]
    CentroidArity {
        /// Cluster label of the offending centroid.
        cluster: ClusterId,
        /// Number of feature columns the bundle names.
        expected: usize,
        /// Number of values the centroid carries.
        found: usize,
    },
    /// A producible cluster has no score entry.
    #[error("cluster {cluster} has no entry in the score map")]
    MissingClusterScore {
        /// Cluster label without a score.
        cluster: ClusterId,
    },
    /// A cluster score lies outside the normalized range.
    #[error("score {score} for cluster {cluster} is outside 0.0..=1.0")]
    ScoreOutOfRange {
        /// Cluster label with the bad score.
        cluster: ClusterId,
        /// Score found in the map.
        score: f32,
    },
    /// Creating the parent directory for the artifact failed.
    #[error("failed to create parent directory {path}")]
    CreateParent {
        /// Path of the directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the artifact failed.
    #[error("failed to write maturity bundle at {path}")]
    WriteFile {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the bundle failed.
    #[error("failed to serialise maturity bundle into {path}")]
    Serialise {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `bincode`.
        #[source]
        source: bincode::Error,
    },
}
