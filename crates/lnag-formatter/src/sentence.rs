//! Full sentences for matcher results.

use crate::humanize::{approx_count, humanize_count, humanize_quantity, humanize_ratio, is_hedged};
use crate::phrasing::{Frame, collective_verb, destination, pluralize, single};
use lnag_core::{DimensionResult, UnitResult};
use lnag_types::{Concept, Dimension};

/// Which matcher the comparison came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// "the height of 1 Eiffel Tower", "the length of 5 Soccer Fields"
    Unit,
    /// "the height of an Eiffel Tower", "2 and a half times the length of a Soccer Field"
    Pair,
}

/// Render a single-concept comparison.
///
/// `input` and `unit` are what the user typed, before conversion to base
/// units.
///
/// ```
/// use lnag_core::UnitResult;
/// use lnag_formatter::format_unit_result;
/// use lnag_types::{Concept, Dimension};
///
/// let field = Concept::new("Soccer Field", "Sports").with_value(Dimension::Length, 100.0);
/// let result = UnitResult { concept: &field, ratio: 5.0, dimension: Dimension::Length, score: 0.0 };
/// assert_eq!(
///     format_unit_result(&result, 500.0, "m"),
///     "500 m is about the length of 5 Soccer Fields."
/// );
/// ```
pub fn format_unit_result(result: &UnitResult<'_>, input: f64, unit: &str) -> String {
    let (hedged, comparison) = compare(result.dimension, result.concept, result.ratio, Mode::Unit);
    let about = if hedged { "" } else { "about " };
    format!("{} {unit} is {about}{comparison}.", humanize_quantity(input))
}

/// Render a "many small things ≈ a few big things" comparison.
pub fn format_dimension_result(result: &DimensionResult<'_>) -> String {
    let count = humanize_count(result.count);
    let subject = match result.dimension {
        Dimension::Distance => format!("{count}x the distance to {}", destination(result.unit_item)),
        _ => format!("{count} {}", pluralize(&result.unit_item.name)),
    };
    let (hedged, comparison) = compare(result.dimension, result.target_item, result.ratio, Mode::Pair);
    let about = if hedged { "" } else { "about " };
    format!("{subject} {} {about}{comparison}.", collective_verb(result.dimension))
}

/// Build the comparison phrase and report whether it already hedges.
fn compare(dimension: Dimension, target: &Concept, ratio: f64, mode: Mode) -> (bool, String) {
    let frame = match mode {
        Mode::Unit => Frame::for_dimension(dimension),
        Mode::Pair => Frame::collective(dimension),
    };
    let multiplier = humanize_ratio(ratio);

    if frame == Frame::DistanceTo {
        return (is_hedged(&multiplier), frame.relate(&multiplier, &destination(target)));
    }

    if multiplier.is_empty() {
        let object = match mode {
            Mode::Unit if !target.proper_noun => format!("1 {}", target.name),
            _ => single(target),
        };
        return (false, frame.relate("", &object));
    }

    if ratio < 1.0 || target.proper_noun {
        return (is_hedged(&multiplier), frame.relate(&multiplier, &single(target)));
    }

    // A plain count reads better than a multiplier: "as much as 2 Elephants"
    // rather than "2x as much as an Elephant".
    let counts_items = matches!(frame, Frame::Equative(_)) || mode == Mode::Unit;
    if counts_items {
        let amount = approx_count(ratio);
        let object = format!("{amount} {}", pluralize(&target.name));
        (is_hedged(&amount), frame.relate("", &object))
    } else {
        (is_hedged(&multiplier), frame.relate(&multiplier, &single(target)))
    }
}
