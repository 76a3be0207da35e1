//! Scoring for the Roamsignal recommendation engine.
//!
//! The crate provides three complementary capabilities:
//! - **Itinerary matching** scores how well a record's descriptive text
//!   covers a traveller's comma-separated waypoint list.
//! - **Maturity classification** loads the fitted classifier artifact
//!   (`maturity.bin`): a nearest-centroid predictor, the feature columns it
//!   expects, and the cluster-to-score map. The artifact is validated
//!   fail-fast; a malformed bundle aborts initialization.
//! - **Request-time ranking** blends coverage, maturity, and itinerary
//!   signals under the priority's weight profile and returns the top three
//!   candidates through the [`Recommender`](roamsignal_core::Recommender)
//!   trait.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use roamsignal_scorer::{RecommendationEngine, load_maturity_file};
//!
//! let bundle = load_maturity_file(Utf8Path::new("artifacts/maturity.bin"))
//!     .expect("load classifier bundle");
//! let engine = RecommendationEngine::from_bundle(Vec::new(), bundle);
//! assert_eq!(engine.record_count(), 0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::fs::File;
use std::io::BufWriter;

use bincode::Options;
use camino::Utf8Path;

mod engine;
mod error;
mod itinerary;
mod maturity;

pub use engine::RecommendationEngine;
pub use error::MaturityBundleError;
pub use itinerary::itinerary_score;
pub use maturity::{Centroid, MaturityBundle, MaturityScores};

/// Bincode options used for serializing and deserializing bundle artifacts.
pub(crate) fn bincode_options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
}

/// Public helper exposing the bincode configuration used for bundle files.
#[must_use]
pub fn maturity_bincode_options() -> impl bincode::Options {
    bincode_options()
}

/// Load and validate a maturity bundle artifact.
///
/// # Errors
/// Returns [`MaturityBundleError`] when the file is unreadable, undecodable,
/// or fails any bundle invariant (empty parts, centroid arity, missing or
/// out-of-range cluster scores).
pub fn load_maturity_file(path: &Utf8Path) -> Result<MaturityBundle, MaturityBundleError> {
    let bytes =
        std::fs::read(path.as_std_path()).map_err(|source| MaturityBundleError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    let bundle: MaturityBundle =
        bincode_options()
            .deserialize(&bytes)
            .map_err(|source| MaturityBundleError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
    bundle.validate()?;
    Ok(bundle)
}

/// Persist a bundle to disk, creating the parent directory when missing.
///
/// # Errors
/// Propagates filesystem and serialisation failures.
pub fn write_maturity_file(
    path: &Utf8Path,
    bundle: &MaturityBundle,
) -> Result<(), MaturityBundleError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        std::fs::create_dir_all(parent.as_std_path()).map_err(|source| {
            MaturityBundleError::CreateParent {
                path: parent.to_path_buf(),
                source,
            }
        })?;
    }
    let file =
        File::create(path.as_std_path()).map_err(|source| MaturityBundleError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    let writer = BufWriter::new(file);
    bincode_options()
        .serialize_into(writer, bundle)
        .map_err(|source| MaturityBundleError::Serialise {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}
