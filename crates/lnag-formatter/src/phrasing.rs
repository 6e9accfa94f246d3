//! Grammar helpers shared by the sentence builders.

use lnag_types::{Concept, Dimension};

/// How a dimension is compared in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Frame {
    /// "as much as", "as long as"
    Equative(&'static str),
    /// "the distance to"
    DistanceTo,
    /// "the height of", "the area of"
    Measure(&'static str),
}

impl Frame {
    /// Frame for a single quantity: "500 kg is about the weight of ...".
    pub(crate) fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Duration => Self::Equative("long"),
            Dimension::Distance => Self::DistanceTo,
            other => Self::Measure(other.as_str()),
        }
    }

    /// Frame after a collective verb: "... would weigh about as much as ...".
    pub(crate) fn collective(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Weight => Self::Equative("much"),
            other => Self::for_dimension(other),
        }
    }

    /// Join an optional multiplier and an object noun phrase.
    pub(crate) fn relate(self, scale: &str, object: &str) -> String {
        let body = match self {
            Self::Equative(adjective) => format!("as {adjective} as {object}"),
            Self::DistanceTo => format!("the distance to {object}"),
            Self::Measure(noun) => format!("the {noun} of {object}"),
        };
        if scale.is_empty() { body } else { format!("{scale} {body}") }
    }
}

/// Verb phrase for a collection of items in a dimension.
pub(crate) fn collective_verb(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Length => "lined up would stretch",
        Dimension::Height => "stacked would be",
        Dimension::Weight => "would weigh",
        Dimension::Volume => "would fill",
        Dimension::Area => "would cover",
        Dimension::Duration => "would last",
        Dimension::Distance => "would span",
        Dimension::Width => "would equal",
    }
}

pub(crate) fn indefinite_article(name: &str) -> &'static str {
    match name.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// "the Eiffel Tower", "an African Elephant"
pub(crate) fn single(concept: &Concept) -> String {
    if concept.proper_noun {
        format!("the {}", concept.name)
    } else {
        format!("{} {}", indefinite_article(&concept.name), concept.name)
    }
}

/// "the Sun", "Mars"
pub(crate) fn destination(concept: &Concept) -> String {
    if concept.proper_noun { format!("the {}", concept.name) } else { concept.name.clone() }
}

pub(crate) fn pluralize(name: &str) -> String {
    format!("{name}s")
}
