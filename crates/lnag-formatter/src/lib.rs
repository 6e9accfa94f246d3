#![deny(warnings)]
//! English rendering for lnag comparisons.
//!
//! The matchers in `lnag-core` produce ratios; this crate turns them into
//! sentences a person would actually say:
//!
//! - "500 m is about the length of 5 Soccer Fields."
//! - "2,000 Watermelons would weigh about as much as 2 African Elephants."
//!
//! Numbers are grouped with commas, ratios are rounded to halves and hedged
//! ("more than 5", "almost 6") and proper nouns take "the".

pub mod humanize;
mod phrasing;
pub mod sentence;

pub use humanize::{approx_count, humanize_count, humanize_quantity, humanize_ratio};
pub use sentence::{format_dimension_result, format_unit_result};
