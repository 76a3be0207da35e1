//! Property-based tests for the scoring engine.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid inputs, complementing the unit tests and BDD behavioural tests.
//!
//! # Invariants tested
//!
//! - **Score range:** every component and the blended score stay within
//!   `0.0..=1.0` (within rounding tolerance).
//! - **Result cap:** at most three candidates come back, never more than
//!   the region subset holds.
//! - **Ordering:** results are sorted by final score, descending.
//! - **Priority totality:** arbitrary priority text never causes a failure.

use std::collections::BTreeMap;

use proptest::prelude::*;
use roamsignal_core::test_support::{FixedClusterModel, RecordBuilder};
use roamsignal_core::{OperatorRecord, RecommendRequest, Recommender};
use roamsignal_scorer::{MaturityScores, RecommendationEngine, itinerary_score};

const TOLERANCE: f32 = 0.005;

fn build_records(band_counts: &[u32]) -> Vec<OperatorRecord> {
    band_counts
        .iter()
        .enumerate()
        .map(|(index, &bands)| {
            RecordBuilder::named(&format!("Operator {index}"))
                .region("India")
                .band_count(bands)
                .description("Coverage across Delhi and Agra")
                .build()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the itinerary score is a fraction in the unit interval for
    /// any itinerary and description text.
    #[test]
    fn itinerary_score_stays_in_unit_range(
        itinerary in ".{0,60}",
        description in ".{0,60}",
    ) {
        let record = RecordBuilder::named("Fuzzed")
            .description(&description)
            .build();
        let score = itinerary_score(&itinerary, &record);
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: recommendations are capped at three, never exceed the
    /// subset size, and every reported score stays in the unit interval.
    #[test]
    fn recommendations_are_capped_and_bounded(
        band_counts in proptest::collection::vec(0_u32..6, 0..12),
        priority_raw in "[a-z0-9 ]{0,10}",
        itinerary in ".{0,40}",
    ) {
        let records = build_records(&band_counts);
        let engine = RecommendationEngine::new(
            records,
            FixedClusterModel::new(0),
            MaturityScores::new(BTreeMap::from([(0, 0.5)])),
        );
        let request = RecommendRequest::new("India", &priority_raw, itinerary);
        let results = engine.recommend(&request);

        prop_assert!(results.len() <= 3);
        prop_assert!(results.len() <= band_counts.len());
        for result in &results {
            for score in [
                result.coverage_score,
                result.cluster_score,
                result.itinerary_score,
                result.final_score,
            ] {
                prop_assert!(score >= -TOLERANCE);
                prop_assert!(score <= 1.0 + TOLERANCE);
            }
        }
    }

    /// Property: results come back sorted by final score, descending.
    #[test]
    fn recommendations_sort_descending(
        band_counts in proptest::collection::vec(0_u32..6, 1..12),
    ) {
        let records = build_records(&band_counts);
        let engine = RecommendationEngine::new(
            records,
            FixedClusterModel::new(0),
            MaturityScores::new(BTreeMap::from([(0, 0.5)])),
        );
        let request = RecommendRequest::new("India", "coverage", "Delhi");
        let results = engine.recommend(&request);

        prop_assert!(!results.is_empty());
        let sorted = results
            .iter()
            .zip(results.iter().skip(1))
            .all(|(left, right)| left.final_score >= right.final_score);
        prop_assert!(sorted);
    }

    /// Property: identical requests against unchanged state return
    /// identical rankings.
    #[test]
    fn recommendations_are_idempotent(
        band_counts in proptest::collection::vec(0_u32..6, 1..8),
        itinerary in ".{0,30}",
    ) {
        let records = build_records(&band_counts);
        let engine = RecommendationEngine::new(
            records,
            FixedClusterModel::new(0),
            MaturityScores::new(BTreeMap::from([(0, 0.5)])),
        );
        let request = RecommendRequest::new("India", "overall", itinerary);
        prop_assert_eq!(engine.recommend(&request), engine.recommend(&request));
    }
}
