//! Completeness engine of the product catalog.
//!
//! For a product, decides per channel and locale whether every attribute its
//! family requires is filled, and lists what is missing.

pub mod domain;
pub mod shared;

pub use domain::a006_completeness::{CompletenessCalculator, CompletenessError};
