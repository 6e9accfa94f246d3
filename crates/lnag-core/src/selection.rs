//! Near-tie selection shared by both matchers
//!
//! Candidates within a fixed tolerance of the best score are equally good
//! comparisons; one of them is drawn uniformly at random so repeated queries
//! vary their output.

use rand::Rng;
use tracing::debug;

/// A candidate together with its ratio score (lower is better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<T> {
    pub item: T,
    pub score: f64,
}

impl<T> Scored<T> {
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

/// Every candidate scoring within `tolerance` of the best one.
pub fn near_ties<T>(candidates: Vec<Scored<T>>, tolerance: f64) -> Vec<Scored<T>> {
    let best = candidates.iter().map(|c| c.score).fold(f64::INFINITY, f64::min);
    candidates.into_iter().filter(|c| c.score <= best + tolerance).collect()
}

/// Draw one candidate uniformly from the near-tie set.
///
/// Returns `None` when there are no candidates.
pub fn choose_near_tie<T, R>(candidates: Vec<Scored<T>>, tolerance: f64, rng: &mut R) -> Option<Scored<T>>
where
    R: Rng + ?Sized,
{
    let total = candidates.len();
    let mut ties = near_ties(candidates, tolerance);
    debug!(candidates = total, near_ties = ties.len(), "Selecting among near-ties");
    if ties.is_empty() {
        return None;
    }
    let position = rng.gen_range(0..ties.len());
    Some(ties.swap_remove(position))
}
