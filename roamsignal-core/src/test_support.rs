//! Test-only record builders and classifier doubles used by unit and
//! behaviour tests.

use crate::{ClusterId, FeatureColumn, MaturityModel, OperatorRecord};

/// Fluent builder for [`OperatorRecord`] fixtures.
///
/// Defaults to an otherwise-empty record so tests only state the fields a
/// scenario cares about.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: OperatorRecord,
}

impl RecordBuilder {
    /// Start a record with the given full name.
    #[must_use]
    pub fn named(full_name: &str) -> Self {
        Self {
            record: OperatorRecord {
                full_name: Some(full_name.to_owned()),
                ..OperatorRecord::default()
            },
        }
    }

    /// Set the derived region.
    #[must_use]
    pub fn region(mut self, region: &str) -> Self {
        self.record.region = Some(region.to_owned());
        self
    }

    /// Set the free-text description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.record.description = Some(description.to_owned());
        self
    }

    /// Set the covered-regions text.
    #[must_use]
    pub fn covered_regions(mut self, covered_regions: &str) -> Self {
        self.record.covered_regions = Some(covered_regions.to_owned());
        self
    }

    /// Set the raw networks text.
    #[must_use]
    pub fn networks(mut self, networks: &str) -> Self {
        self.record.networks = Some(networks.to_owned());
        self
    }

    /// Set the derived band count.
    #[must_use]
    pub fn band_count(mut self, band_count: u32) -> Self {
        self.record.band_count = band_count;
        self
    }

    /// Set the capability flags in 2G/3G/4G/5G order.
    #[must_use]
    pub fn flags(mut self, has_2g: bool, has_3g: bool, has_4g: bool, has_5g: bool) -> Self {
        self.record.has_2g = has_2g;
        self.record.has_3g = has_3g;
        self.record.has_4g = has_4g;
        self.record.has_5g = has_5g;
        self
    }

    /// Set the founding year.
    #[must_use]
    pub fn founded(mut self, founded: f64) -> Self {
        self.record.founded = founded;
        self
    }

    /// Finish the record.
    #[must_use]
    pub fn build(self) -> OperatorRecord {
        self.record
    }
}

/// `MaturityModel` double assigning the same cluster to every record.
#[derive(Debug, Clone)]
pub struct FixedClusterModel {
    columns: Vec<FeatureColumn>,
    cluster: ClusterId,
}

impl FixedClusterModel {
    /// Build a double that always predicts `cluster`.
    #[must_use]
    pub fn new(cluster: ClusterId) -> Self {
        Self {
            columns: FeatureColumn::ALL.to_vec(),
            cluster,
        }
    }
}

impl MaturityModel for FixedClusterModel {
    fn feature_columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    fn predict(&self, _features: &[f64]) -> ClusterId {
        self.cluster
    }
}

/// `MaturityModel` double that clusters on the 5G flag alone.
///
/// Predicts cluster 1 when the `has_5g` feature is set, cluster 0 otherwise,
/// which gives behaviour tests two distinguishable maturity tiers without a
/// fitted artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveGSplitModel;

impl MaturityModel for FiveGSplitModel {
    fn feature_columns(&self) -> &[FeatureColumn] {
        &[FeatureColumn::Has5g]
    }

    fn predict(&self, features: &[f64]) -> ClusterId {
        ClusterId::from(features.first().copied().unwrap_or(0.0) > 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_requested_fields() {
        let record = RecordBuilder::named("Metro Telecom")
            .region("India")
            .band_count(3)
            .flags(true, true, true, false)
            .build();
        assert_eq!(record.full_name.as_deref(), Some("Metro Telecom"));
        assert_eq!(record.band_count, 3);
        assert!(!record.has_5g);
    }

    #[test]
    fn five_g_split_model_separates_tiers() {
        let model = FiveGSplitModel;
        assert_eq!(model.predict(&[1.0]), 1);
        assert_eq!(model.predict(&[0.0]), 0);
    }
}
