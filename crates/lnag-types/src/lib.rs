//! lnag Types
//!
//! This crate defines the value types shared across the lnag workspace
//! (currently `lnag-core`, `lnag-formatter` and `lnag-cli`). Keeping them here
//! lets the formatter and the matcher agree on `Concept` and `Dimension`
//! without depending on each other.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod concept;
mod dimension;

pub use concept::Concept;
pub use dimension::{Dimension, ParseDimensionError};
