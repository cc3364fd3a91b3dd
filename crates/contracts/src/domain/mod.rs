pub mod common;

pub mod a001_attribute;
pub mod a002_locale;
pub mod a003_channel;
pub mod a004_family;
pub mod a005_product;
pub mod a006_completeness;
