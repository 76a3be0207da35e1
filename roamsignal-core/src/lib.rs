//! Core domain types for the Roamsignal engine.
//!
//! The crate defines the operator records produced at dataset load time, the
//! traveller-facing request and result types, and the capability traits the
//! scoring engine is built against. Derivation, matching, and ranking live in
//! the companion crates; everything here is plain data and contracts.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod feature;
mod maturity;
mod priority;
mod recommend;
mod record;
mod region;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use feature::FeatureColumn;
pub use maturity::{ClusterId, MaturityModel};
pub use priority::{Priority, WeightProfile};
pub use recommend::{RankedOperator, RecommendRequest, Recommender};
pub use record::{OperatorRecord, RawRecord};
pub use region::RegionIndex;
