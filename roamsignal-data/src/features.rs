//! Per-record feature derivation.
//!
//! Capability flags, the band count, and the region are computed from free
//! text here; founding-year imputation needs the whole dataset and lives in
//! [`crate::dataset`]. Derivation never fails: absent or non-text input
//! degrades to `None`/`false`/`0`.

use roamsignal_core::{OperatorRecord, RawRecord};

/// Marker token removed (case-sensitively) from the covered-countries cell
/// to obtain the region name.
pub(crate) const REGION_MARKER: &str = "covered";

/// Lowercase marker substrings tested (case-insensitively) against the
/// networks cell. 5G is flagged by either of its two markers.
pub(crate) const MARKER_2G: &str = "gsm";
pub(crate) const MARKER_3G: &str = "umts";
pub(crate) const MARKER_4G: &str = "lte";
pub(crate) const MARKERS_5G: [&str; 2] = ["5g", "nr"];

/// Derive everything except the founding year, which is returned raw so the
/// caller can impute it with the dataset median.
pub(crate) fn derive_record(raw: RawRecord) -> (OperatorRecord, Option<f64>) {
    let lowered_networks = raw.networks.as_deref().map(str::to_lowercase);
    let lowered = lowered_networks.as_deref();

    let record = OperatorRecord {
        region: extract_region(raw.covered_countries.as_deref()),
        has_2g: contains_marker(lowered, MARKER_2G),
        has_3g: contains_marker(lowered, MARKER_3G),
        has_4g: contains_marker(lowered, MARKER_4G),
        has_5g: MARKERS_5G
            .iter()
            .any(|marker| contains_marker(lowered, marker)),
        band_count: count_bands(raw.networks.as_deref()),
        full_name: raw.full_name,
        short_name: raw.short_name,
        headquarters: raw.headquarters,
        description: raw.description,
        networks: raw.networks,
        data_links: raw.data_links,
        covered_regions: raw.covered_regions,
        founded: 0.0,
    };
    let founded = parse_founded(raw.founded.as_deref());
    (record, founded)
}

/// Extract the region from a covered-countries cell.
///
/// The marker is removed wherever it occurs and the remainder trimmed; a
/// cell holding nothing but the marker yields an empty region, which the
/// region index later drops.
pub(crate) fn extract_region(covered_countries: Option<&str>) -> Option<String> {
    covered_countries.map(|text| text.replace(REGION_MARKER, "").trim().to_owned())
}

fn contains_marker(lowered_networks: Option<&str>, marker: &str) -> bool {
    lowered_networks.is_some_and(|text| text.contains(marker))
}

/// Count the non-blank comma-separated tokens in a networks cell.
pub(crate) fn count_bands(networks: Option<&str>) -> u32 {
    networks.map_or(0, |text| {
        let count = text
            .split(',')
            .filter(|token| !token.trim().is_empty())
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    })
}

/// Coerce a raw founded cell to a number; anything unparseable is missing.
pub(crate) fn parse_founded(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Median of the parseable founding years, averaging the middle pair for
/// even-sized samples.
pub(crate) fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some(f64::midpoint(values[mid - 1], values[mid]))
    } else {
        Some(values[mid])
    }
}
