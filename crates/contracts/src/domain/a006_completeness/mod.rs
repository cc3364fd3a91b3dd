pub mod aggregate;

pub use aggregate::{Completeness, CompletenessDto};
