//! Comparison matching
//!
//! Two searches over a [`ConceptStore`]:
//!
//! - **Unit matching** picks one concept so that `value / concept` is a nice
//!   ratio ("500 m is about 5 Soccer Fields").
//! - **Dimension matching** picks a pair so that `count × unit` is a nice
//!   multiple of `target` ("2,000 Watermelons weigh about 2 African Elephants").
//!
//! Both score candidates with [`score_ratio`], keep the near-ties and draw one
//! at random from the injected RNG.

use crate::config::MatcherConfig;
use crate::constants::matcher::MIN_PAIR_CONCEPTS;
use crate::error::{LnagError, LnagResult};
use crate::scorer::{NICE_NUMBERS, nearest_nice, score_ratio};
use crate::selection::{Scored, choose_near_tie};
use crate::store::{ConceptId, ConceptStore};
use lnag_types::{Concept, Dimension};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// A single-concept comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitResult<'s> {
    pub concept: &'s Concept,
    /// `value / concept value`
    pub ratio: f64,
    /// Dimension of the index the concept came from; may be the length/distance
    /// counterpart of the requested one.
    pub dimension: Dimension,
    pub score: f64,
}

/// A "many small things ≈ a few big things" comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionResult<'s> {
    pub unit_item: &'s Concept,
    pub target_item: &'s Concept,
    pub count: f64,
    /// `count × unit value / target value`
    pub ratio: f64,
    pub dimension: Dimension,
    pub score: f64,
}

/// Runs both searches against one store with one set of thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'s> {
    store: &'s ConceptStore,
    config: MatcherConfig,
}

impl<'s> Matcher<'s> {
    pub fn new(store: &'s ConceptStore) -> Self {
        Self::with_config(store, MatcherConfig::default())
    }

    pub fn with_config(store: &'s ConceptStore, config: MatcherConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Find the concept whose magnitude makes `value` the most relatable.
    ///
    /// `value` must already be in the base unit of `dimension`. Length queries
    /// also search distances and vice versa.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a non-finite or non-positive value, `NoMatch` when
    /// the searched indices are empty or every ratio falls outside the window.
    #[instrument(skip(self, rng))]
    pub fn find_unit_match<R>(&self, value: f64, dimension: Dimension, rng: &mut R) -> LnagResult<UnitResult<'s>>
    where
        R: Rng + ?Sized,
    {
        ensure_positive(value)?;

        let mut candidates = Vec::new();
        for &searched in dimension.compatible() {
            for entry in self.store.index(searched).entries() {
                let ratio = value / entry.value;
                if !self.config.accepts_ratio(ratio) {
                    continue;
                }
                let score = score_ratio(ratio);
                let result = UnitResult {
                    concept: self.store.concept(entry.concept),
                    ratio,
                    dimension: searched,
                    score,
                };
                candidates.push(Scored::new(result, score));
            }
        }

        debug!(candidates = candidates.len(), "Scored unit candidates");
        let pick = choose_near_tie(candidates, self.config.score_tolerance, rng)
            .ok_or_else(|| LnagError::no_match(dimension, value))?;

        debug!(
            concept = %pick.item.concept.name,
            ratio = pick.item.ratio,
            nice = nearest_nice(pick.item.ratio),
            "Selected unit match"
        );
        Ok(pick.item)
    }

    /// Find a (unit item, target item) pair such that `count` unit items
    /// compare to a nice multiple of the target.
    ///
    /// For every unit item and every nice multiplier the ideal target value is
    /// looked up by binary search, so the search is
    /// O(units × multipliers × log units). The target is always strictly
    /// larger than the unit item and never the same concept.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a non-finite or non-positive count,
    /// `InsufficientData` when fewer than two concepts have `dimension`,
    /// `NoMatch` when no pair survives filtering.
    #[instrument(skip(self, rng))]
    pub fn find_dimension_match<R>(
        &self,
        count: f64,
        dimension: Dimension,
        rng: &mut R,
    ) -> LnagResult<DimensionResult<'s>>
    where
        R: Rng + ?Sized,
    {
        ensure_positive(count)?;

        let index = self.store.index(dimension);
        if index.len() < MIN_PAIR_CONCEPTS {
            return Err(LnagError::insufficient_data(dimension, index.len()));
        }

        let mut seen: HashSet<(ConceptId, ConceptId)> = HashSet::new();
        let mut candidates = Vec::new();
        for unit in index.entries() {
            let total = count * unit.value;
            for nice in NICE_NUMBERS {
                let Some(target) = index.find_closest(total / nice) else {
                    continue;
                };
                if target.concept == unit.concept || unit.value >= target.value {
                    continue;
                }
                let ratio = total / target.value;
                if !self.config.accepts_ratio(ratio) {
                    continue;
                }
                // several multipliers can land on the same target
                if !seen.insert((unit.concept, target.concept)) {
                    continue;
                }
                let score = score_ratio(ratio);
                let result = DimensionResult {
                    unit_item: self.store.concept(unit.concept),
                    target_item: self.store.concept(target.concept),
                    count,
                    ratio,
                    dimension,
                    score,
                };
                candidates.push(Scored::new(result, score));
            }
        }

        debug!(candidates = candidates.len(), "Scored pair candidates");
        let pick = choose_near_tie(candidates, self.config.score_tolerance, rng)
            .ok_or_else(|| LnagError::no_match(dimension, count))?;

        debug!(
            unit_item = %pick.item.unit_item.name,
            target_item = %pick.item.target_item.name,
            ratio = pick.item.ratio,
            "Selected dimension match"
        );
        Ok(pick.item)
    }
}

/// Single-concept search with default thresholds and a thread-local RNG.
pub fn find_unit_match(value: f64, dimension: Dimension, store: &ConceptStore) -> LnagResult<UnitResult<'_>> {
    Matcher::new(store).find_unit_match(value, dimension, &mut rand::thread_rng())
}

/// Pair search with default thresholds and a thread-local RNG.
pub fn find_dimension_match(
    count: f64,
    dimension: Dimension,
    store: &ConceptStore,
) -> LnagResult<DimensionResult<'_>> {
    Matcher::new(store).find_dimension_match(count, dimension, &mut rand::thread_rng())
}

fn ensure_positive(value: f64) -> LnagResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LnagError::invalid_input(value, "expected a finite number greater than zero"))
    }
}
