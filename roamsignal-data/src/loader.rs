//! CSV materialization of the raw operator dataset.
//!
//! The loader only renames the raw export headers into [`RawRecord`] fields;
//! every derived attribute is computed later by [`crate::Dataset::from_raw`].

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use roamsignal_core::RawRecord;

use crate::DatasetError;

/// Raw header names as they appear in the dataset export.
const HEADER_FULL_NAME: &str = "Full name:";
const HEADER_SHORT_NAME: &str = "Short name";
const HEADER_HEADQUARTERS: &str = "Headquarters";
const HEADER_DESCRIPTION: &str = "Description";
const HEADER_NETWORKS: &str = "Cellular Networks Installed";
const HEADER_DATA_LINKS: &str = "Supported Cellular Data Links";
const HEADER_IS_OPERATOR: &str = "Cellular Network Operator";
const HEADER_COVERED_COUNTRIES: &str = "Covered Countries";
const HEADER_COVERED_REGIONS: &str = "Covered Regions";
const HEADER_FOUNDED: &str = "Founded";

/// Load-time dataset format configuration.
///
/// Encoding and delimiter belong to the loader, not the scoring contract.
/// The export this engine was built around uses `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetFormat {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for DatasetFormat {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

/// Read and decode the dataset file.
///
/// Non-UTF-8 bytes (the export ships as Latin-1) are decoded lossily so a
/// stray accent never aborts the load.
///
/// # Errors
/// Returns [`DatasetError`] when the file is unreadable or the table is
/// structurally broken (bad rows, missing columns).
pub fn read_dataset(path: &Utf8Path, format: DatasetFormat) -> Result<Vec<RawRecord>, DatasetError> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| DatasetError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let rows = parse_dataset(&text, format)?;
    debug!("materialized {} rows from {path}", rows.len());
    Ok(rows)
}

/// Decode an in-memory dataset.
///
/// # Errors
/// Returns [`DatasetError`] when the table is structurally broken.
pub fn parse_dataset(text: &str, format: DatasetFormat) -> Result<Vec<RawRecord>, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Headers { source })?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| DatasetError::Row { source })?;
        rows.push(columns.raw_record(&row));
    }
    Ok(rows)
}

/// Column positions resolved from the raw header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    full_name: usize,
    short_name: usize,
    headquarters: usize,
    description: usize,
    networks: usize,
    data_links: usize,
    is_operator: usize,
    covered_countries: usize,
    covered_regions: usize,
    founded: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, DatasetError> {
        Ok(Self {
            full_name: find(headers, HEADER_FULL_NAME)?,
            short_name: find(headers, HEADER_SHORT_NAME)?,
            headquarters: find(headers, HEADER_HEADQUARTERS)?,
            description: find(headers, HEADER_DESCRIPTION)?,
            networks: find(headers, HEADER_NETWORKS)?,
            data_links: find(headers, HEADER_DATA_LINKS)?,
            is_operator: find(headers, HEADER_IS_OPERATOR)?,
            covered_countries: find(headers, HEADER_COVERED_COUNTRIES)?,
            covered_regions: find(headers, HEADER_COVERED_REGIONS)?,
            founded: find(headers, HEADER_FOUNDED)?,
        })
    }

    fn raw_record(&self, row: &StringRecord) -> RawRecord {
        RawRecord {
            full_name: cell(row, self.full_name),
            short_name: cell(row, self.short_name),
            headquarters: cell(row, self.headquarters),
            description: cell(row, self.description),
            networks: cell(row, self.networks),
            data_links: cell(row, self.data_links),
            is_operator: cell(row, self.is_operator),
            covered_countries: cell(row, self.covered_countries),
            covered_regions: cell(row, self.covered_regions),
            founded: cell(row, self.founded),
        }
    }
}

fn find(headers: &StringRecord, header: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|candidate| candidate.trim() == header)
        .ok_or(DatasetError::MissingColumn { header })
}

/// Blank cells become `None`, matching the "missing" semantics every
/// downstream derivation expects.
fn cell(row: &StringRecord, index: usize) -> Option<String> {
    row.get(index)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
}
