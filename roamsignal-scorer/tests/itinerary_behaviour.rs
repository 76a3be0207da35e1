//! Behavioural coverage for itinerary waypoint matching.

use std::cell::{Cell, RefCell};

use roamsignal_core::OperatorRecord;
use roamsignal_core::test_support::RecordBuilder;
use roamsignal_scorer::itinerary_score;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn record() -> RefCell<OperatorRecord> {
    RefCell::new(OperatorRecord::default())
}

#[fixture]
fn itinerary() -> RefCell<String> {
    RefCell::new(String::new())
}

#[fixture]
fn result() -> Cell<f32> {
    Cell::new(0.0)
}

#[given("an operator describing service in Delhi and Agra")]
fn given_described_operator(#[from(record)] record: &RefCell<OperatorRecord>) {
    *record.borrow_mut() = RecordBuilder::named("Metro Telecom")
        .description("Urban coverage across Delhi and Agra")
        .region("India")
        .build();
}

#[given("an operator with no descriptive text")]
fn given_blank_operator(#[from(record)] record: &RefCell<OperatorRecord>) {
    *record.borrow_mut() = RecordBuilder::named("Blank Networks").build();
}

#[given("an itinerary covering both waypoints")]
fn given_full_itinerary(#[from(itinerary)] itinerary: &RefCell<String>) {
    *itinerary.borrow_mut() = "Delhi, Agra".to_owned();
}

#[given("an itinerary covering one of two waypoints")]
fn given_partial_itinerary(#[from(itinerary)] itinerary: &RefCell<String>) {
    *itinerary.borrow_mut() = "Delhi, Reykjavik".to_owned();
}

#[given("an empty itinerary")]
fn given_empty_itinerary(#[from(itinerary)] itinerary: &RefCell<String>) {
    itinerary.borrow_mut().clear();
}

#[when("I score the itinerary")]
fn when_score(
    #[from(record)] record: &RefCell<OperatorRecord>,
    #[from(itinerary)] itinerary: &RefCell<String>,
    #[from(result)] result: &Cell<f32>,
) {
    let scored = record.borrow();
    let waypoints = itinerary.borrow();
    result.set(itinerary_score(&waypoints, &scored));
}

#[then("the result is {float}")]
fn then_result(expected: f32, #[from(result)] result: &Cell<f32>) {
    assert!((result.get() - expected).abs() <= 1e-6);
}

#[scenario(path = "tests/features/itinerary.feature", index = 0)]
fn every_waypoint_covered(
    record: RefCell<OperatorRecord>,
    itinerary: RefCell<String>,
    result: Cell<f32>,
) {
    let _ = (record, itinerary, result);
}

#[scenario(path = "tests/features/itinerary.feature", index = 1)]
fn half_of_waypoints_covered(
    record: RefCell<OperatorRecord>,
    itinerary: RefCell<String>,
    result: Cell<f32>,
) {
    let _ = (record, itinerary, result);
}

#[scenario(path = "tests/features/itinerary.feature", index = 2)]
fn empty_itinerary(
    record: RefCell<OperatorRecord>,
    itinerary: RefCell<String>,
    result: Cell<f32>,
) {
    let _ = (record, itinerary, result);
}

#[scenario(path = "tests/features/itinerary.feature", index = 3)]
fn operator_without_text(
    record: RefCell<OperatorRecord>,
    itinerary: RefCell<String>,
    result: Cell<f32>,
) {
    let _ = (record, itinerary, result);
}
