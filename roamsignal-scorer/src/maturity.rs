//! The fitted technology-maturity classifier bundle.
//!
//! The artifact packages three parts: a nearest-centroid predictor, the
//! feature columns it expects, and the cluster-to-score map. Validation is
//! fail-fast at load time; a missing score for a producible cluster is a
//! configuration error, never a runtime condition to default silently.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use roamsignal_core::{ClusterId, FeatureColumn, MaturityModel};
use serde::{Deserialize, Serialize};

use crate::MaturityBundleError;

/// Normalised maturity scores keyed by cluster identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityScores {
    scores: BTreeMap<ClusterId, f32>,
}

impl MaturityScores {
    /// Construct a score map from precomputed values.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "score maps are produced at runtime from fitted artifacts"
    )]
    #[must_use]
    pub fn new(scores: BTreeMap<ClusterId, f32>) -> Self {
        Self { scores }
    }

    /// Return the score for a cluster, if present.
    #[must_use]
    pub fn get(&self, cluster: ClusterId) -> Option<f32> {
        self.scores.get(&cluster).copied()
    }

    /// Return the number of scored clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether any scores are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Consume the wrapper and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<ClusterId, f32> {
        self.scores
    }
}

/// One labelled centroid of the fitted clustering model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    cluster: ClusterId,
    values: Vec<f64>,
}

impl Centroid {
    /// Build a centroid from its cluster label and feature values.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "centroids are produced at runtime when a bundle is authored"
    )]
    #[must_use]
    pub fn new(cluster: ClusterId, values: Vec<f64>) -> Self {
        Self { cluster, values }
    }

    /// Cluster label this centroid predicts.
    #[must_use]
    pub const fn cluster(&self) -> ClusterId {
        self.cluster
    }

    /// Feature values in the bundle's column order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// The classifier artifact: predictor, feature columns, and score map.
///
/// A bundle constructed through [`MaturityBundle::new`] or loaded through
/// [`crate::load_maturity_file`] is always valid: every centroid matches
/// the column arity and every producible cluster has a normalized score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityBundle {
    columns: Vec<FeatureColumn>,
    centroids: Vec<Centroid>,
    scores: MaturityScores,
}

impl MaturityBundle {
    /// Validate and construct a bundle.
    ///
    /// # Errors
    /// Returns [`MaturityBundleError`] when any of the three parts is
    /// empty, a centroid's arity disagrees with the column list, or a
    /// centroid's cluster lacks a score within `0.0..=1.0`.
    pub fn new(
        columns: Vec<FeatureColumn>,
        centroids: Vec<Centroid>,
        scores: MaturityScores,
    ) -> Result<Self, MaturityBundleError> {
        let bundle = Self {
            columns,
            centroids,
            scores,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Re-check the bundle invariants, e.g. after decoding an artifact.
    pub(crate) fn validate(&self) -> Result<(), MaturityBundleError> {
        if self.columns.is_empty() {
            return Err(MaturityBundleError::NoFeatureColumns);
        }
        if self.centroids.is_empty() {
            return Err(MaturityBundleError::NoCentroids);
        }
        if self.scores.is_empty() {
            return Err(MaturityBundleError::NoClusterScores);
        }
        for centroid in &self.centroids {
            if centroid.values().len() != self.columns.len() {
                return Err(MaturityBundleError::CentroidArity {
                    cluster: centroid.cluster(),
                    expected: self.columns.len(),
                    found: centroid.values().len(),
                });
            }
            match self.scores.get(centroid.cluster()) {
                None => {
                    return Err(MaturityBundleError::MissingClusterScore {
                        cluster: centroid.cluster(),
                    });
                }
                Some(score) if !(0.0..=1.0).contains(&score) => {
                    return Err(MaturityBundleError::ScoreOutOfRange {
                        cluster: centroid.cluster(),
                        score,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Borrow the cluster score map.
    #[must_use]
    pub const fn scores(&self) -> &MaturityScores {
        &self.scores
    }

    /// Borrow the centroids.
    #[must_use]
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }
}

impl MaturityModel for MaturityBundle {
    fn feature_columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "nearest-centroid prediction accumulates squared distances"
    )]
    fn predict(&self, features: &[f64]) -> ClusterId {
        let mut best: Option<(f64, ClusterId)> = None;
        for centroid in &self.centroids {
            let distance: f64 = centroid
                .values()
                .iter()
                .zip(features)
                .map(|(centre, value)| (centre - value) * (centre - value))
                .sum();
            // Strict comparison keeps the first centroid on ties, so
            // prediction is deterministic for a fixed bundle.
            let improved = best.is_none_or(|(best_distance, _)| distance < best_distance);
            if improved {
                best = Some((distance, centroid.cluster()));
            }
        }
        best.map_or(0, |(_, cluster)| cluster)
    }
}
