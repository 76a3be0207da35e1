#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for region-filtered ranking.

use std::cell::RefCell;
use std::collections::BTreeMap;

use roamsignal_core::test_support::{FiveGSplitModel, RecordBuilder};
use roamsignal_core::{Priority, RankedOperator, RecommendRequest, Recommender};
use roamsignal_scorer::{MaturityScores, RecommendationEngine};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    engine: RefCell<Option<RecommendationEngine<FiveGSplitModel>>>,
    results: RefCell<Vec<RankedOperator>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        engine: RefCell::new(None),
        results: RefCell::new(Vec::new()),
    }
}

#[given("a dataset with operators in India and Chile")]
fn seeded_engine(context: &TestContext) {
    let records = vec![
        RecordBuilder::named("Metro Telecom")
            .region("India")
            .band_count(3)
            .flags(true, true, true, false)
            .description("Urban coverage across Delhi and Agra")
            .build(),
        RecordBuilder::named("NextGen Mobile")
            .region("India")
            .band_count(2)
            .flags(false, false, true, true)
            .description("5G rollout in the largest cities")
            .build(),
        RecordBuilder::named("Valley Cells")
            .region("India")
            .band_count(1)
            .flags(true, false, false, false)
            .build(),
        RecordBuilder::named("Coastal Waves")
            .region("India")
            .band_count(2)
            .flags(true, true, false, false)
            .build(),
        RecordBuilder::named("Silent One").region("Chile").build(),
        RecordBuilder::named("Silent Two").region("Chile").build(),
    ];
    let scores = MaturityScores::new(BTreeMap::from([(0, 0.2), (1, 1.0)]));
    *context.engine.borrow_mut() = Some(RecommendationEngine::new(
        records,
        FiveGSplitModel,
        scores,
    ));
}

fn run_request(context: &TestContext, region: &str, priority: Priority) {
    let guard = context.engine.borrow();
    let engine = guard.as_ref().expect("engine should be seeded");
    let request = RecommendRequest {
        region: region.to_owned(),
        priority,
        itinerary: String::new(),
    };
    *context.results.borrow_mut() = engine.recommend(&request);
}

#[when("I request overall recommendations for Atlantis")]
fn when_overall_atlantis(context: &TestContext) {
    run_request(context, "Atlantis", Priority::Overall);
}

#[when("I request coverage recommendations for Chile")]
fn when_coverage_chile(context: &TestContext) {
    run_request(context, "Chile", Priority::Coverage);
}

#[when("I request 5g recommendations for India")]
fn when_five_g_india(context: &TestContext) {
    run_request(context, "India", Priority::FiveG);
}

#[when("I request overall recommendations for India")]
fn when_overall_india(context: &TestContext) {
    run_request(context, "India", Priority::Overall);
}

#[then("no operators are recommended")]
fn then_empty(context: &TestContext) {
    assert!(context.results.borrow().is_empty());
}

#[then("every recommended coverage score is zero")]
fn then_zero_coverage(context: &TestContext) {
    let results = context.results.borrow();
    assert!(!results.is_empty());
    assert!(results.iter().all(|result| result.coverage_score == 0.0));
}

#[then("NextGen Mobile ranks first")]
fn then_next_gen_first(context: &TestContext) {
    let results = context.results.borrow();
    let leader = results.first().and_then(|result| result.full_name.as_deref());
    assert_eq!(leader, Some("NextGen Mobile"));
}

#[then("exactly three operators are recommended")]
fn then_three_results(context: &TestContext) {
    assert_eq!(context.results.borrow().len(), 3);
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn unknown_region(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn zero_band_region(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn five_g_priority(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 3)]
fn top_three_truncation(context: TestContext) {
    let _ = context;
}
