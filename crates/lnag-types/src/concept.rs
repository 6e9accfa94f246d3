use crate::Dimension;
use serde::{Deserialize, Serialize};

/// A named real-world reference object or event.
///
/// A concept carries zero or more magnitudes, one per [`Dimension`], each
/// expressed in that dimension's base unit. An elephant has a height, a length
/// and a weight; a durations record only ever has `duration_s`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Display name, e.g. "African Elephant"
    pub name: String,
    /// Loose grouping such as "Animal" or "Landmark"
    #[serde(default)]
    pub category: String,
    /// Proper nouns take "the" instead of "a"/"an" when rendered
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub proper_noun: bool,
    /// Length in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,
    /// Height in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    /// Width in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_m: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Volume in cubic meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_m3: Option<f64>,
    /// Area in square meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<f64>,
    /// Distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<f64>,
}

impl Concept {
    /// Create a concept with no magnitudes.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self { name: name.into(), category: category.into(), ..Self::default() }
    }

    /// Mark the concept as a proper noun.
    #[must_use]
    pub fn proper(mut self) -> Self {
        self.proper_noun = true;
        self
    }

    /// Set the magnitude for `dimension`, replacing any previous value.
    #[must_use]
    pub fn with_value(mut self, dimension: Dimension, value: f64) -> Self {
        *self.slot_mut(dimension) = Some(value);
        self
    }

    /// Magnitude in `dimension`, if the concept has one.
    #[must_use]
    pub const fn value_for(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Length => self.length_m,
            Dimension::Height => self.height_m,
            Dimension::Width => self.width_m,
            Dimension::Weight => self.weight_kg,
            Dimension::Volume => self.volume_m3,
            Dimension::Area => self.area_m2,
            Dimension::Distance => self.distance_m,
            Dimension::Duration => self.duration_s,
        }
    }

    /// Dimensions for which the concept has a value.
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        Dimension::ALL.into_iter().filter(|dimension| self.value_for(*dimension).is_some())
    }

    const fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<f64> {
        match dimension {
            Dimension::Length => &mut self.length_m,
            Dimension::Height => &mut self.height_m,
            Dimension::Width => &mut self.width_m,
            Dimension::Weight => &mut self.weight_kg,
            Dimension::Volume => &mut self.volume_m3,
            Dimension::Area => &mut self.area_m2,
            Dimension::Distance => &mut self.distance_m,
            Dimension::Duration => &mut self.duration_s,
        }
    }
}
