//! Free-text itinerary matching against a record's descriptive fields.
#![forbid(unsafe_code)]

use roamsignal_core::OperatorRecord;

/// Score how well a record's descriptive text covers an itinerary.
///
/// The itinerary is split on commas; each waypoint is trimmed and
/// lowercased, and counts when it occurs as a substring of the record's
/// combined covered-regions, description, and region text. The score is
/// the matched fraction, in `0.0..=1.0`. Duplicate waypoints count
/// independently. An itinerary with no usable waypoints, or a record with
/// no descriptive text, scores exactly `0.0`.
///
/// # Examples
/// ```
/// use roamsignal_core::OperatorRecord;
/// use roamsignal_scorer::itinerary_score;
///
/// let record = OperatorRecord {
///     description: Some("Coverage across Delhi and Agra".into()),
///     ..OperatorRecord::default()
/// };
/// assert_eq!(itinerary_score("Delhi, Agra", &record), 1.0);
/// assert_eq!(itinerary_score("Delhi, Reykjavik", &record), 0.5);
/// assert_eq!(itinerary_score("", &record), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the waypoint fraction divides two small counts"
)]
pub fn itinerary_score(itinerary: &str, record: &OperatorRecord) -> f32 {
    let waypoints: Vec<String> = itinerary
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();
    if waypoints.is_empty() {
        return 0.0;
    }

    let blob = text_blob(record);
    if blob.trim().is_empty() {
        return 0.0;
    }

    let matched = waypoints
        .iter()
        .filter(|waypoint| blob.contains(waypoint.as_str()))
        .count();
    matched as f32 / waypoints.len() as f32
}

/// Lowercase, space-joined concatenation of the record's descriptive text,
/// skipping missing fields.
fn text_blob(record: &OperatorRecord) -> String {
    let mut blob = String::new();
    for field in [
        record.covered_regions.as_deref(),
        record.description.as_deref(),
        record.region.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        blob.push(' ');
        blob.push_str(&field.to_lowercase());
    }
    blob
}
