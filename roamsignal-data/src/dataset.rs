//! The loaded, read-only dataset the engine scores against.

use log::{debug, warn};
use roamsignal_core::{OperatorRecord, RawRecord, RegionIndex};

use crate::features::{derive_record, median};

/// Derived operator records plus the region index built over them.
///
/// Construction happens once at process start; the dataset is immutable
/// afterwards and safe to share across request threads.
///
/// # Examples
/// ```
/// use roamsignal_core::RawRecord;
/// use roamsignal_data::Dataset;
///
/// let row = RawRecord {
///     networks: Some("GSM, LTE".into()),
///     covered_countries: Some("Kenya covered".into()),
///     founded: Some("1999".into()),
///     ..RawRecord::default()
/// };
/// let dataset = Dataset::from_raw(vec![row]);
/// assert_eq!(dataset.regions().as_slice(), ["Kenya"]);
/// assert_eq!(dataset.records()[0].band_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<OperatorRecord>,
    regions: RegionIndex,
}

impl Dataset {
    /// Derive records from raw rows and build the region index.
    ///
    /// Missing founding years are imputed with the median of the parseable
    /// values, computed once over the whole dataset so the result does not
    /// depend on row order. A dataset with no parseable founding year at
    /// all falls back to `0.0` for every record.
    #[must_use]
    pub fn from_raw(rows: Vec<RawRecord>) -> Self {
        let mut derived: Vec<(OperatorRecord, Option<f64>)> =
            rows.into_iter().map(derive_record).collect();

        let known: Vec<f64> = derived.iter().filter_map(|(_, founded)| *founded).collect();
        let fallback = median(known).unwrap_or_else(|| {
            warn!("no parseable founding year in dataset; defaulting to 0");
            0.0
        });

        let missing = derived
            .iter()
            .filter(|(_, founded)| founded.is_none())
            .count();
        if missing > 0 {
            debug!("imputing {missing} founding years with median {fallback}");
        }

        for (record, founded) in &mut derived {
            record.founded = founded.unwrap_or(fallback);
        }

        let records: Vec<OperatorRecord> = derived.into_iter().map(|(record, _)| record).collect();
        let regions = RegionIndex::from_regions(
            records
                .iter()
                .filter_map(|record| record.region.as_deref().map(str::to_owned)),
        );
        Self { records, regions }
    }

    /// Borrow the derived records.
    #[must_use]
    pub fn records(&self) -> &[OperatorRecord] {
        &self.records
    }

    /// Borrow the region index.
    #[must_use]
    pub fn regions(&self) -> &RegionIndex {
        &self.regions
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Split into the records and the region index.
    #[must_use]
    pub fn into_parts(self) -> (Vec<OperatorRecord>, RegionIndex) {
        (self.records, self.regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(founded: Option<&str>, countries: Option<&str>) -> RawRecord {
        RawRecord {
            covered_countries: countries.map(str::to_owned),
            founded: founded.map(str::to_owned),
            ..RawRecord::default()
        }
    }

    #[test]
    fn imputes_missing_founded_with_median() {
        let dataset = Dataset::from_raw(vec![
            row(Some("1990"), None),
            row(Some("2000"), None),
            row(Some("2010"), None),
            row(Some("n/a"), None),
        ]);
        let founded: Vec<f64> = dataset.records().iter().map(|r| r.founded).collect();
        assert_eq!(founded, vec![1990.0, 2000.0, 2010.0, 2000.0]);
    }

    #[test]
    fn imputation_is_order_independent() {
        let forwards = Dataset::from_raw(vec![
            row(Some("1990"), None),
            row(None, None),
            row(Some("2000"), None),
        ]);
        let backwards = Dataset::from_raw(vec![
            row(Some("2000"), None),
            row(None, None),
            row(Some("1990"), None),
        ]);
        assert_eq!(forwards.records()[1].founded, backwards.records()[1].founded);
    }

    #[test]
    fn all_unparseable_defaults_to_zero() {
        let dataset = Dataset::from_raw(vec![row(Some("soon"), None), row(None, None)]);
        assert!(dataset.records().iter().all(|r| r.founded == 0.0));
    }

    #[test]
    fn region_index_skips_missing_and_blank_regions() {
        let dataset = Dataset::from_raw(vec![
            row(None, Some("India covered")),
            row(None, Some("covered")),
            row(None, None),
            row(None, Some("India covered")),
            row(None, Some("Chile covered")),
        ]);
        assert_eq!(dataset.regions().as_slice(), ["Chile", "India"]);
        assert_eq!(dataset.len(), 5);
    }

    #[test]
    fn empty_dataset_is_valid() {
        let dataset = Dataset::from_raw(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.regions().is_empty());
    }
}
