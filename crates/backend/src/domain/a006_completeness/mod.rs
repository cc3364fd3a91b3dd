//! Completeness of products per channel and locale
//!
//! Data flow for one product:
//! family → [`RequiredValuesGenerator`] → required slots per channel/locale
//! → [`MissingRequiredAttributesCalculator`] (with the product values)
//! → missing attributes per channel/locale → [`CompletenessCalculator`]
//! → one record per channel/locale pair.

pub mod calculator;
pub mod checker;
pub mod error;
pub mod factory;
pub mod matrix;
pub mod missing_attributes_calculator;
pub mod missing_required_attributes;
pub mod repository;
pub mod required_values;

#[cfg(test)]
pub(crate) mod fixtures;

pub use calculator::CompletenessCalculator;
pub use checker::{AttributeTypeChecker, ChainedValueCompleteChecker, ValueCompleteChecker};
pub use error::{CheckerError, CompletenessError};
pub use factory::{
    CompletenessFactory, CompletenessParts, DefaultCompletenessFactory, FnCompletenessFactory,
};
pub use matrix::ChannelLocaleMatrix;
pub use missing_attributes_calculator::{MissingBucket, MissingRequiredAttributesCalculator};
pub use missing_required_attributes::MissingRequiredAttributes;
pub use repository::{
    ChannelRepository, InMemoryChannelRepository, InMemoryLocaleRepository, LocaleRepository,
};
pub use required_values::RequiredValuesGenerator;
