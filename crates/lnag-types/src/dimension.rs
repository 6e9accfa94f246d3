use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A category of physical measurement with its own base unit and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Length along the longest axis, in meters
    Length,
    /// Height, in meters
    Height,
    /// Width, in meters
    Width,
    /// Mass, in kilograms
    Weight,
    /// Volume, in cubic meters
    Volume,
    /// Surface area, in square meters
    Area,
    /// Separation between two places, in meters
    Distance,
    /// Time span, in seconds
    Duration,
}

impl Dimension {
    /// Every dimension, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Length,
        Self::Height,
        Self::Width,
        Self::Weight,
        Self::Volume,
        Self::Area,
        Self::Distance,
        Self::Duration,
    ];

    /// Lowercase name used on the command line and in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Height => "height",
            Self::Width => "width",
            Self::Weight => "weight",
            Self::Volume => "volume",
            Self::Area => "area",
            Self::Distance => "distance",
            Self::Duration => "duration",
        }
    }

    /// Symbol of the base unit all values in this dimension are normalised to.
    #[must_use]
    pub const fn base_unit(self) -> &'static str {
        match self {
            Self::Length | Self::Height | Self::Width | Self::Distance => "m",
            Self::Weight => "kg",
            Self::Volume => "m3",
            Self::Area => "m2",
            Self::Duration => "s",
        }
    }

    /// Dimensions consulted when looking for a single comparison concept.
    ///
    /// Length and distance share a base unit, so each also searches the other.
    /// Every other dimension only searches itself.
    #[must_use]
    pub const fn compatible(self) -> &'static [Self] {
        match self {
            Self::Length => &[Self::Length, Self::Distance],
            Self::Distance => &[Self::Distance, Self::Length],
            Self::Height => &[Self::Height],
            Self::Width => &[Self::Width],
            Self::Weight => &[Self::Weight],
            Self::Volume => &[Self::Volume],
            Self::Area => &[Self::Area],
            Self::Duration => &[Self::Duration],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known dimension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dimension: {input:?}")]
pub struct ParseDimensionError {
    /// The text that failed to parse
    pub input: String,
}

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseDimensionError { input: s.to_string() })
    }
}
