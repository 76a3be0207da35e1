//! Named feature columns a maturity classifier may request.
//!
//! The enum offers compile-time safety for feature lookups: a classifier
//! bundle can only name columns every record is able to supply.
//!
//! # Examples
//! ```
//! use roamsignal_core::FeatureColumn;
//!
//! assert_eq!(FeatureColumn::Has4g.as_str(), "has_4g");
//! assert_eq!(FeatureColumn::BandCount.to_string(), "band_count");
//! ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureColumn {
    /// GSM capability flag.
    Has2g,
    /// UMTS capability flag.
    Has3g,
    /// LTE capability flag.
    Has4g,
    /// 5G/NR capability flag.
    Has5g,
    /// Count of installed network bands.
    BandCount,
    /// Founding year after imputation.
    Founded,
}

impl FeatureColumn {
    /// Every column, in the order records report them.
    pub const ALL: [Self; 6] = [
        Self::Has2g,
        Self::Has3g,
        Self::Has4g,
        Self::Has5g,
        Self::BandCount,
        Self::Founded,
    ];

    /// Return the column as its dataset name.
    ///
    /// # Examples
    /// ```
    /// use roamsignal_core::FeatureColumn;
    ///
    /// assert_eq!(FeatureColumn::Founded.as_str(), "founded");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Has2g => "has_2g",
            Self::Has3g => "has_3g",
            Self::Has4g => "has_4g",
            Self::Has5g => "has_5g",
            Self::BandCount => "band_count",
            Self::Founded => "founded",
        }
    }
}

impl std::fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FeatureColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "has_2g" => Ok(Self::Has2g),
            "has_3g" => Ok(Self::Has3g),
            "has_4g" => Ok(Self::Has4g),
            "has_5g" => Ok(Self::Has5g),
            "band_count" => Ok(Self::BandCount),
            "founded" => Ok(Self::Founded),
            _ => Err(format!("unknown feature column '{s}'")),
        }
    }
}
