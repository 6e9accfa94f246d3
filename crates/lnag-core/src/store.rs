//! Concept storage with per-dimension sorted indices
//!
//! The store owns every concept exactly once. Each [`DimensionIndex`] refers
//! to concepts by [`ConceptId`] (a position in the store's concept list) and
//! keeps its entries sorted ascending by value, so nearest-value lookups are a
//! binary search.

use crate::dataset::{ConceptSource, EmbeddedDataset};
use crate::error::LnagResult;
use lnag_types::{Concept, Dimension};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Position of a concept inside its [`ConceptStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConceptId(pub(crate) usize);

impl ConceptId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A concept's magnitude in one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexEntry {
    pub concept: ConceptId,
    pub value: f64,
}

/// Entries for one dimension, sorted ascending by value.
#[derive(Debug, Clone, Default)]
pub struct DimensionIndex {
    entries: Vec<IndexEntry>,
}

impl DimensionIndex {
    /// Build an index, dropping unusable values and sorting the rest.
    ///
    /// Zero, negative and non-finite values count as absent: they would make
    /// ratios degenerate or divide by zero.
    pub fn from_entries(entries: impl IntoIterator<Item = IndexEntry>) -> Self {
        let mut entries: Vec<IndexEntry> = entries
            .into_iter()
            .filter(|entry| entry.value.is_finite() && entry.value > 0.0)
            .collect();
        entries.sort_by(|a, b| a.value.total_cmp(&b.value));
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry whose value is nearest to `target`.
    ///
    /// When `target` sits exactly between two neighbours the lower one wins.
    /// Returns `None` only for an empty index.
    pub fn find_closest(&self, target: f64) -> Option<&IndexEntry> {
        let n = self.entries.len();
        if n == 0 {
            return None;
        }
        let i = self.entries.partition_point(|entry| entry.value < target);
        if i == 0 {
            return self.entries.first();
        }
        if i == n {
            return self.entries.last();
        }
        let (lo, hi) = (&self.entries[i - 1], &self.entries[i]);
        if target - lo.value <= hi.value - target { Some(lo) } else { Some(hi) }
    }
}

/// Immutable reference dataset plus one index per dimension.
///
/// Built once at startup and passed by reference to the matchers.
#[derive(Debug, Clone)]
pub struct ConceptStore {
    concepts: Vec<Concept>,
    indices: HashMap<Dimension, DimensionIndex>,
}

impl ConceptStore {
    /// Build a store from an already loaded concept list.
    #[instrument(skip(concepts), fields(count = concepts.len()))]
    pub fn new(concepts: Vec<Concept>) -> Self {
        let indices = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let index = DimensionIndex::from_entries(concepts.iter().enumerate().filter_map(
                    |(position, concept)| {
                        concept
                            .value_for(dimension)
                            .map(|value| IndexEntry { concept: ConceptId(position), value })
                    },
                ));
                debug!(%dimension, entries = index.len(), "Built dimension index");
                (dimension, index)
            })
            .collect();

        Self { concepts, indices }
    }

    /// Load concepts from `source` and index them.
    pub fn load<S: ConceptSource + ?Sized>(source: &S) -> LnagResult<Self> {
        let concepts = source.load()?;
        debug!(source = source.name(), "Building concept store");
        Ok(Self::new(concepts))
    }

    /// Store over the dataset compiled into the binary.
    pub fn embedded() -> LnagResult<Self> {
        Self::load(&EmbeddedDataset)
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Resolve an id handed out by one of this store's indices.
    pub fn concept(&self, id: ConceptId) -> &Concept {
        &self.concepts[id.0]
    }

    /// Sorted index for `dimension`; empty when no concept has that dimension.
    pub fn index(&self, dimension: Dimension) -> &DimensionIndex {
        static EMPTY: DimensionIndex = DimensionIndex { entries: Vec::new() };
        self.indices.get(&dimension).unwrap_or(&EMPTY)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
