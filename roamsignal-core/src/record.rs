//! Operator records: the raw tabular row and its derived form.
//!
//! [`RawRecord`] mirrors the dataset columns as materialized by a loader.
//! [`OperatorRecord`] carries the attributes derived once when a dataset is
//! built: capability flags, the band count, the extracted region, and the
//! imputed founding year. Derived records are read-only for the rest of the
//! process lifetime.

use crate::FeatureColumn;

/// A provider row as materialized from the tabular dataset.
///
/// Missing cells are `None`. The row keeps every dataset column, including
/// `is_operator`, which scoring never consults and which is dropped from the
/// derived record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRecord {
    /// Full legal name of the provider.
    pub full_name: Option<String>,
    /// Short or brand name.
    pub short_name: Option<String>,
    /// Headquarters location.
    pub headquarters: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Installed cellular networks, comma separated.
    pub networks: Option<String>,
    /// Supported cellular data links.
    pub data_links: Option<String>,
    /// Whether the provider operates its own network.
    pub is_operator: Option<String>,
    /// Covered-countries cell; the region is extracted from this.
    pub covered_countries: Option<String>,
    /// Covered regions within the country.
    pub covered_regions: Option<String>,
    /// Founding year as written in the dataset.
    pub founded: Option<String>,
}

/// An operator record with its load-time derived attributes.
///
/// # Examples
/// ```
/// use roamsignal_core::{FeatureColumn, OperatorRecord};
///
/// let record = OperatorRecord {
///     full_name: Some("Metro Telecom Ltd".into()),
///     region: Some("India".into()),
///     has_4g: true,
///     band_count: 3,
///     founded: 1995.0,
///     ..OperatorRecord::default()
/// };
/// assert_eq!(record.feature(FeatureColumn::Has4g), 1.0);
/// assert_eq!(record.feature(FeatureColumn::BandCount), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorRecord {
    /// Full legal name of the provider.
    pub full_name: Option<String>,
    /// Short or brand name.
    pub short_name: Option<String>,
    /// Headquarters location.
    pub headquarters: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Installed cellular networks, comma separated.
    pub networks: Option<String>,
    /// Supported cellular data links.
    pub data_links: Option<String>,
    /// Covered regions within the country.
    pub covered_regions: Option<String>,
    /// Region extracted from the covered-countries cell; `None` when the
    /// source cell was missing.
    pub region: Option<String>,
    /// GSM marker present in `networks`.
    pub has_2g: bool,
    /// UMTS marker present in `networks`.
    pub has_3g: bool,
    /// LTE marker present in `networks`.
    pub has_4g: bool,
    /// 5G or NR marker present in `networks`.
    pub has_5g: bool,
    /// Count of non-blank comma-separated tokens in `networks`.
    pub band_count: u32,
    /// Founding year; imputed with the dataset median when unparseable.
    pub founded: f64,
}

impl OperatorRecord {
    /// Return the value of one named feature column.
    ///
    /// Capability flags map to `0.0`/`1.0` so a classifier sees a uniform
    /// numeric vector.
    #[must_use]
    pub fn feature(&self, column: FeatureColumn) -> f64 {
        match column {
            FeatureColumn::Has2g => f64::from(u8::from(self.has_2g)),
            FeatureColumn::Has3g => f64::from(u8::from(self.has_3g)),
            FeatureColumn::Has4g => f64::from(u8::from(self.has_4g)),
            FeatureColumn::Has5g => f64::from(u8::from(self.has_5g)),
            FeatureColumn::BandCount => f64::from(self.band_count),
            FeatureColumn::Founded => self.founded,
        }
    }

    /// Build the feature vector for the given column order.
    #[must_use]
    pub fn feature_vector(&self, columns: &[FeatureColumn]) -> Vec<f64> {
        columns.iter().map(|&column| self.feature(column)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FeatureColumn::Has2g, 0.0)]
    #[case(FeatureColumn::Has5g, 1.0)]
    #[case(FeatureColumn::BandCount, 4.0)]
    #[case(FeatureColumn::Founded, 2001.0)]
    fn feature_lookup(#[case] column: FeatureColumn, #[case] expected: f64) {
        let record = OperatorRecord {
            has_5g: true,
            band_count: 4,
            founded: 2001.0,
            ..OperatorRecord::default()
        };
        assert!((record.feature(column) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn feature_vector_follows_column_order() {
        let record = OperatorRecord {
            has_2g: true,
            band_count: 2,
            ..OperatorRecord::default()
        };
        let vector = record.feature_vector(&[FeatureColumn::BandCount, FeatureColumn::Has2g]);
        assert_eq!(vector, vec![2.0, 1.0]);
    }
}
