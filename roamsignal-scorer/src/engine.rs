//! Region-filtered scoring and ranking of operator records.
#![forbid(unsafe_code)]

use log::debug;
use roamsignal_core::{
    MaturityModel, OperatorRecord, RankedOperator, RecommendRequest, Recommender, WeightProfile,
};

use crate::MaturityScores;
use crate::itinerary::itinerary_score;
use crate::maturity::MaturityBundle;

/// Number of providers returned per request.
const TOP_N: usize = 3;

/// Scoring context built once at startup from the loaded records and the
/// fitted maturity classifier.
///
/// The engine is immutable after construction and [`Recommender::recommend`]
/// is a pure function over it, so concurrent requests are safe without
/// locking.
#[derive(Debug, Clone)]
pub struct RecommendationEngine<M> {
    records: Vec<OperatorRecord>,
    model: M,
    scores: MaturityScores,
}

/// Per-request transient pairing a record with its component scores.
struct ScoredCandidate<'a> {
    record: &'a OperatorRecord,
    coverage: f32,
    maturity: f32,
    itinerary: f32,
    final_score: f32,
}

impl<M: MaturityModel> RecommendationEngine<M> {
    /// Build an engine from derived records, a classifier, and its scores.
    #[must_use]
    pub fn new(records: Vec<OperatorRecord>, model: M, scores: MaturityScores) -> Self {
        Self {
            records,
            model,
            scores,
        }
    }

    /// Number of records the engine scores against.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    fn maturity_score(&self, record: &OperatorRecord) -> f32 {
        let features = record.feature_vector(self.model.feature_columns());
        let cluster = self.model.predict(&features);
        // Bundle validation guarantees an entry for every producible
        // cluster; the fallback only covers hand-built score maps.
        self.scores.get(cluster).unwrap_or(0.0)
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "coverage normalizes a bounded band count and the blend sums weighted components"
    )]
    fn score_candidate<'a>(
        &self,
        record: &'a OperatorRecord,
        max_bands: u32,
        weights: WeightProfile,
        itinerary: &str,
    ) -> ScoredCandidate<'a> {
        let coverage = record.band_count as f32 / max_bands as f32;
        let maturity = self.maturity_score(record);
        let itinerary_match = itinerary_score(itinerary, record);
        let final_score = weights.coverage * coverage
            + weights.maturity * maturity
            + weights.itinerary * itinerary_match;
        ScoredCandidate {
            record,
            coverage,
            maturity,
            itinerary: itinerary_match,
            final_score,
        }
    }
}

impl RecommendationEngine<MaturityBundle> {
    /// Build an engine directly from a validated bundle, using the bundle
    /// both as the predictor and as the source of cluster scores.
    #[must_use]
    pub fn from_bundle(records: Vec<OperatorRecord>, bundle: MaturityBundle) -> Self {
        let scores = bundle.scores().clone();
        Self::new(records, bundle, scores)
    }
}

impl<M: MaturityModel> Recommender for RecommendationEngine<M> {
    fn recommend(&self, request: &RecommendRequest) -> Vec<RankedOperator> {
        let subset: Vec<&OperatorRecord> = self
            .records
            .iter()
            .filter(|record| record.region.as_deref() == Some(request.region.as_str()))
            .collect();
        if subset.is_empty() {
            debug!("no records cover region {:?}", request.region);
            return Vec::new();
        }

        // A region where nothing reports a band keeps the divisor at 1 so
        // every coverage score degrades to zero instead of dividing by zero.
        let max_bands = subset
            .iter()
            .map(|record| record.band_count)
            .max()
            .unwrap_or(0)
            .max(1);
        let weights = request.priority.weights();

        let mut candidates: Vec<ScoredCandidate<'_>> = subset
            .into_iter()
            .map(|record| self.score_candidate(record, max_bands, weights, &request.itinerary))
            .collect();
        // Stable sort: candidates with equal scores keep their dataset order.
        candidates.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
        candidates.truncate(TOP_N);
        candidates.iter().map(ScoredCandidate::to_ranked).collect()
    }
}

impl ScoredCandidate<'_> {
    fn to_ranked(&self) -> RankedOperator {
        RankedOperator {
            full_name: self.record.full_name.clone(),
            short_name: self.record.short_name.clone(),
            headquarters: self.record.headquarters.clone(),
            description: self.record.description.clone(),
            networks: self.record.networks.clone(),
            data_links: self.record.data_links.clone(),
            coverage_score: round2(self.coverage),
            cluster_score: round2(self.maturity),
            itinerary_score: round2(self.itinerary),
            final_score: round2(self.final_score),
        }
    }
}

/// Round a score to two decimals for the output view; ranking itself uses
/// full precision.
#[expect(
    clippy::float_arithmetic,
    reason = "presentation rounding multiplies and divides by 100"
)]
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
