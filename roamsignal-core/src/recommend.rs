//! Recommendation requests and ranked results.

use crate::Priority;

/// Parameters for one recommendation request.
///
/// The request is transient: it is consumed by a single scoring pass and
/// never persisted.
///
/// # Examples
/// ```
/// use roamsignal_core::{Priority, RecommendRequest};
///
/// let request = RecommendRequest {
///     region: "India".into(),
///     priority: Priority::FiveG,
///     itinerary: "Delhi, Agra, Jaipur".into(),
/// };
/// assert_eq!(request.priority, Priority::FiveG);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendRequest {
    /// Selected region used to filter candidates.
    pub region: String,
    /// Stated optimisation goal.
    pub priority: Priority,
    /// Raw comma-separated waypoint list; may be empty.
    pub itinerary: String,
}

impl RecommendRequest {
    /// Convenience constructor parsing the priority from free text.
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        priority: &str,
        itinerary: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            priority: Priority::parse(priority),
            itinerary: itinerary.into(),
        }
    }
}

/// One ranked provider, as returned to the caller.
///
/// Descriptive fields are copied from the underlying record; the four score
/// fields are rounded to two decimals for presentation while the ranking
/// itself is computed at full precision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedOperator {
    /// Full legal name of the provider.
    pub full_name: Option<String>,
    /// Short or brand name.
    pub short_name: Option<String>,
    /// Headquarters location.
    pub headquarters: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Installed cellular networks.
    pub networks: Option<String>,
    /// Supported cellular data links.
    pub data_links: Option<String>,
    /// Band count normalized within the filtered region.
    pub coverage_score: f32,
    /// Technology-maturity score from the classifier adapter.
    pub cluster_score: f32,
    /// Itinerary waypoint match fraction.
    pub itinerary_score: f32,
    /// Weighted blend used for ranking.
    pub final_score: f32,
}

/// Rank candidate providers for a traveller's request.
///
/// Implementations must be `Send + Sync`; requests are read-only over state
/// loaded once at startup, so concurrent calls are safe by construction.
/// The method is infallible for a loaded system: an unmatched region yields
/// an empty list, never an error.
pub trait Recommender: Send + Sync {
    /// Return up to three providers, most relevant first.
    fn recommend(&self, request: &RecommendRequest) -> Vec<RankedOperator>;
}
