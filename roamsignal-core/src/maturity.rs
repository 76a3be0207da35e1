//! Capability interface for the technology-maturity classifier.
//!
//! The classifier itself is an external, already-fitted artifact. The engine
//! only needs a pure function from a record's feature vector to a cluster
//! identifier, so any inference mechanism — statistical model, lookup table,
//! or rule set — can sit behind this trait without touching the ranker.

use crate::FeatureColumn;

/// Cluster identifier produced by a maturity classifier.
pub type ClusterId = u32;

/// An already-fitted technology-maturity classifier.
///
/// Implementations must be `Send + Sync` so scoring can run across threads,
/// and `predict` must be deterministic for a fixed feature vector. The
/// engine never retrains or calibrates a model.
///
/// # Examples
/// ```
/// use roamsignal_core::{ClusterId, FeatureColumn, MaturityModel};
///
/// struct FlagModel;
///
/// impl MaturityModel for FlagModel {
///     fn feature_columns(&self) -> &[FeatureColumn] {
///         &[FeatureColumn::Has5g]
///     }
///
///     fn predict(&self, features: &[f64]) -> ClusterId {
///         ClusterId::from(features.first().copied().unwrap_or(0.0) > 0.5)
///     }
/// }
///
/// let model = FlagModel;
/// assert_eq!(model.predict(&[1.0]), 1);
/// ```
pub trait MaturityModel: Send + Sync {
    /// Feature columns, in the order `predict` expects its vector.
    fn feature_columns(&self) -> &[FeatureColumn];

    /// Assign a cluster to one feature vector.
    fn predict(&self, features: &[f64]) -> ClusterId;
}
