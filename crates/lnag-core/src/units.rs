//! Unit resolution
//!
//! Maps a unit name typed by the user onto a dimension and a factor to that
//! dimension's base unit. Lookups are exact and case-sensitive.

use crate::error::{LnagError, LnagResult};
use lnag_types::Dimension;

/// Dimension of a unit and the factor converting it to the base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInfo {
    pub dimension: Dimension,
    pub to_base: f64,
}

const fn unit(dimension: Dimension, to_base: f64) -> UnitInfo {
    UnitInfo { dimension, to_base }
}

static UNIT_TABLE: &[(&str, UnitInfo)] = &[
    // length (base: meters)
    ("m", unit(Dimension::Length, 1.0)),
    ("meters", unit(Dimension::Length, 1.0)),
    ("km", unit(Dimension::Length, 1000.0)),
    ("ft", unit(Dimension::Length, 0.3048)),
    ("feet", unit(Dimension::Length, 0.3048)),
    ("mi", unit(Dimension::Length, 1609.344)),
    ("miles", unit(Dimension::Length, 1609.344)),
    // weight (base: kg)
    ("kg", unit(Dimension::Weight, 1.0)),
    ("g", unit(Dimension::Weight, 0.001)),
    ("lbs", unit(Dimension::Weight, 0.453592)),
    ("tons", unit(Dimension::Weight, 907.185)),
    // volume (base: m3)
    ("m3", unit(Dimension::Volume, 1.0)),
    ("liters", unit(Dimension::Volume, 0.001)),
    ("gallons", unit(Dimension::Volume, 0.003785)),
    // area (base: m2)
    ("m2", unit(Dimension::Area, 1.0)),
    ("acres", unit(Dimension::Area, 4046.86)),
    ("hectares", unit(Dimension::Area, 10000.0)),
    // distance (base: meters), kept apart from length so astronomical units
    // resolve to astronomical comparisons
    ("au", unit(Dimension::Distance, 149_597_870_700.0)),
    ("ly", unit(Dimension::Distance, 9.4607e15)),
    // duration (base: seconds)
    ("s", unit(Dimension::Duration, 1.0)),
    ("sec", unit(Dimension::Duration, 1.0)),
    ("seconds", unit(Dimension::Duration, 1.0)),
    ("min", unit(Dimension::Duration, 60.0)),
    ("minutes", unit(Dimension::Duration, 60.0)),
    ("hr", unit(Dimension::Duration, 3600.0)),
    ("hours", unit(Dimension::Duration, 3600.0)),
    ("days", unit(Dimension::Duration, 86_400.0)),
    ("years", unit(Dimension::Duration, 31_557_600.0)),
];

/// Look up `unit` in the unit table.
pub fn resolve(unit: &str) -> LnagResult<UnitInfo> {
    UNIT_TABLE
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, info)| *info)
        .ok_or_else(|| LnagError::unknown_unit(unit))
}

/// Convert `value` expressed in `unit` to its base-unit value and dimension.
pub fn convert(value: f64, unit: &str) -> LnagResult<(f64, Dimension)> {
    let info = resolve(unit)?;
    Ok((value * info.to_base, info.dimension))
}

/// Every unit name the table knows, in table order.
pub fn known_units() -> impl Iterator<Item = &'static str> {
    UNIT_TABLE.iter().map(|(name, _)| *name)
}
