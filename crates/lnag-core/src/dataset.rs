//! Concept dataset loading
//!
//! The reference data ships inside the binary as two JSON documents: physical
//! measurements (any mix of magnitudes per record) and durations (exactly one
//! `duration_s` per record). A [`ConceptSource`] turns such data into the flat
//! concept list the store is built from.

use crate::error::{LnagError, LnagResult};
use lnag_types::{Concept, Dimension};
use serde::Deserialize;
use tracing::debug;

const MEASUREMENTS_JSON: &str = include_str!("../data/world_measurements.json");
const DURATIONS_JSON: &str = include_str!("../data/world_durations.json");

/// Supplies the concept list a `ConceptStore` is built from.
pub trait ConceptSource {
    /// Name used in error messages and logs.
    fn name(&self) -> &str;

    /// Produce every concept, or fail with [`LnagError::DataLoad`].
    fn load(&self) -> LnagResult<Vec<Concept>>;
}

/// The dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl ConceptSource for EmbeddedDataset {
    fn name(&self) -> &str {
        "embedded"
    }

    fn load(&self) -> LnagResult<Vec<Concept>> {
        load_documents(self.name(), MEASUREMENTS_JSON, DURATIONS_JSON)
    }
}

/// Caller-supplied JSON in the same two-document layout as the embedded data.
#[derive(Debug, Clone, Default)]
pub struct JsonDataset {
    pub measurements: String,
    pub durations: String,
}

impl JsonDataset {
    pub fn new(measurements: impl Into<String>, durations: impl Into<String>) -> Self {
        Self { measurements: measurements.into(), durations: durations.into() }
    }
}

impl ConceptSource for JsonDataset {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self) -> LnagResult<Vec<Concept>> {
        load_documents(self.name(), &self.measurements, &self.durations)
    }
}

/// An in-memory concept list, mostly useful for tests and embedding callers.
impl ConceptSource for [Concept] {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn load(&self) -> LnagResult<Vec<Concept>> {
        Ok(self.to_vec())
    }
}

/// One row of the durations document.
#[derive(Debug, Deserialize)]
struct DurationRecord {
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    proper_noun: bool,
    duration_s: f64,
}

impl From<DurationRecord> for Concept {
    fn from(record: DurationRecord) -> Self {
        Concept {
            name: record.name,
            category: record.category,
            proper_noun: record.proper_noun,
            ..Concept::default()
        }
        .with_value(Dimension::Duration, record.duration_s)
    }
}

/// Parse the measurements document.
pub fn parse_measurements(json: &str) -> LnagResult<Vec<Concept>> {
    serde_json::from_str(json)
        .map_err(|err| LnagError::data_load("world_measurements.json", err.to_string()))
}

/// Parse the durations document into duration-only concepts.
pub fn parse_durations(json: &str) -> LnagResult<Vec<Concept>> {
    let records: Vec<DurationRecord> = serde_json::from_str(json)
        .map_err(|err| LnagError::data_load("world_durations.json", err.to_string()))?;
    Ok(records.into_iter().map(Concept::from).collect())
}

/// Load the embedded dataset: measurements first, then durations.
pub fn load_concepts() -> LnagResult<Vec<Concept>> {
    EmbeddedDataset.load()
}

fn load_documents(source: &str, measurements: &str, durations: &str) -> LnagResult<Vec<Concept>> {
    let mut concepts = parse_measurements(measurements)?;
    let durations = parse_durations(durations)?;
    debug!(
        source,
        measurements = concepts.len(),
        durations = durations.len(),
        "Loaded concept dataset"
    );
    concepts.extend(durations);
    Ok(concepts)
}
