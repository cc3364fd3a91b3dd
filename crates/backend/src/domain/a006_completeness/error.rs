use contracts::enums::AttributeType;
use thiserror::Error;

/// Failures of a completeness calculation.
///
/// None of them is transient: each one points at inconsistent catalog
/// configuration or at a checker that cannot handle a value.
#[derive(Debug, Error)]
pub enum CompletenessError {
    #[error("Channel not found: {0}")]
    UnknownChannel(String),

    #[error("Locale not found: {0}")]
    UnknownLocale(String),

    #[error("Completeness check failed for attribute '{attribute}' on {channel}/{locale}: {source}")]
    Checker {
        attribute: String,
        channel: String,
        locale: String,
        #[source]
        source: CheckerError,
    },
}

/// Errors raised by a value completeness checker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckerError {
    #[error("No completeness checker for attribute type {attribute_type} (attribute '{attribute}')")]
    UnsupportedAttributeType {
        attribute: String,
        attribute_type: AttributeType,
    },

    #[error("Attribute '{attribute}' expects {expected} data, got {actual}")]
    DataTypeMismatch {
        attribute: String,
        expected: &'static str,
        actual: &'static str,
    },
}
