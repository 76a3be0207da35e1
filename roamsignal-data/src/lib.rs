//! Dataset materialization and load-time feature derivation.
//!
//! The crate turns the raw tabular operator dataset into the read-only
//! [`Dataset`] the scoring engine works against. Loading happens exactly
//! once, before any request is served:
//!
//! 1. [`read_dataset`] decodes the CSV file (delimiter is load-time
//!    configuration) and renames the raw headers into [`RawRecord`] fields.
//! 2. [`Dataset::from_raw`] derives capability flags, band counts, and
//!    regions, imputes missing founding years with the dataset-wide median,
//!    and builds the sorted region index.
//!
//! Unreadable or structurally broken input is a configuration error and
//! aborts the load. Data-quality problems inside a well-formed table never
//! error; they degrade to `None`/`false`/`0` during derivation.
//!
//! [`RawRecord`]: roamsignal_core::RawRecord

#![forbid(unsafe_code)]

mod dataset;
mod error;
mod features;
mod loader;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use loader::{DatasetFormat, parse_dataset, read_dataset};
