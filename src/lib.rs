//! Facade crate for the Roamsignal recommendation engine.
//!
//! This crate re-exports the core domain types together with the dataset
//! loader and the scoring engine, so most callers only need one dependency.

#![forbid(unsafe_code)]

pub use roamsignal_core::{
    ClusterId, FeatureColumn, MaturityModel, OperatorRecord, Priority, RankedOperator, RawRecord,
    RecommendRequest, Recommender, RegionIndex, WeightProfile,
};

pub use roamsignal_data::{Dataset, DatasetError, DatasetFormat, parse_dataset, read_dataset};

pub use roamsignal_scorer::{
    Centroid, MaturityBundle, MaturityBundleError, MaturityScores, RecommendationEngine,
    itinerary_score, load_maturity_file, write_maturity_file,
};
