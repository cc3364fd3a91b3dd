//! Shared catalog data model: attributes, channels, locales, families,
//! products with their values, and completeness records.

pub mod domain;
pub mod enums;
