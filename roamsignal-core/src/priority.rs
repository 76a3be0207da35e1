//! Traveller priorities and the weight profile each one selects.
//!
//! The priority-to-weight mapping is a static table so the weighting policy
//! can be audited and tested apart from the ranking logic.

/// The traveller's stated optimisation goal.
///
/// Unrecognized input deliberately falls back to [`Priority::Overall`]; the
/// selection form is free to send anything and still receive a ranking.
///
/// # Examples
/// ```
/// use roamsignal_core::Priority;
///
/// assert_eq!(Priority::parse("5g"), Priority::FiveG);
/// assert_eq!(Priority::parse("fastest ever"), Priority::Overall);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Widest network coverage.
    Coverage,
    /// Strong LTE service.
    #[cfg_attr(feature = "serde", serde(rename = "4g"))]
    FourG,
    /// Strong 5G service.
    #[cfg_attr(feature = "serde", serde(rename = "5g"))]
    FiveG,
    /// Balanced default.
    #[default]
    Overall,
}

/// Weight triple applied to the component scores.
///
/// Weights sum to 1.0 in every built-in profile, keeping the blended score
/// within `0.0..=1.0` when the components are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightProfile {
    /// Weight of the normalized band-count coverage score.
    pub coverage: f32,
    /// Weight of the technology-maturity cluster score.
    pub maturity: f32,
    /// Weight of the itinerary match score.
    pub itinerary: f32,
}

impl Priority {
    /// Parse user input, falling back to [`Priority::Overall`].
    ///
    /// The fallback is silent and intentional: an unknown priority is a
    /// data-quality degradation, not an error.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "coverage" => Self::Coverage,
            "4g" => Self::FourG,
            "5g" => Self::FiveG,
            _ => Self::Overall,
        }
    }

    /// Return the priority as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coverage => "coverage",
            Self::FourG => "4g",
            Self::FiveG => "5g",
            Self::Overall => "overall",
        }
    }

    /// Look up the weight profile for this priority.
    ///
    /// # Examples
    /// ```
    /// use roamsignal_core::Priority;
    ///
    /// let weights = Priority::FiveG.weights();
    /// assert_eq!(weights.maturity, 0.60);
    /// ```
    #[must_use]
    pub const fn weights(self) -> WeightProfile {
        match self {
            Self::Coverage => WeightProfile {
                coverage: 0.60,
                maturity: 0.25,
                itinerary: 0.15,
            },
            Self::FourG => WeightProfile {
                coverage: 0.30,
                maturity: 0.55,
                itinerary: 0.15,
            },
            Self::FiveG => WeightProfile {
                coverage: 0.25,
                maturity: 0.60,
                itinerary: 0.15,
            },
            Self::Overall => WeightProfile {
                coverage: 0.40,
                maturity: 0.40,
                itinerary: 0.20,
            },
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
