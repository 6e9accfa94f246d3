#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for lnag, the "large number approximation generator".
//!
//! This crate turns a number into a relatable comparison: it holds the
//! reference dataset of real-world concepts, scores how "nice" a ratio is and
//! searches for the concept (or pair of concepts) giving the nicest one.

/// Configuration loading and matcher thresholds
pub mod config;
/// Shared constants and defaults
pub mod constants;
/// Reference dataset loading
pub mod dataset;
/// Error types for all core operations
pub mod error;
/// Single-concept and pair matching
pub mod matcher;
/// Ratio scoring against nice multipliers
pub mod scorer;
/// Near-tie collection and random selection
pub mod selection;
/// Concept storage and per-dimension indices
pub mod store;
/// Unit name resolution and conversion to base units
pub mod units;

pub use config::{LnagConfig, MatcherConfig};
pub use dataset::{ConceptSource, EmbeddedDataset, JsonDataset};
pub use error::{LnagError, LnagResult};
pub use matcher::{DimensionResult, Matcher, UnitResult, find_dimension_match, find_unit_match};
pub use store::{ConceptId, ConceptStore, DimensionIndex, IndexEntry};

pub use lnag_types::{Concept, Dimension};
