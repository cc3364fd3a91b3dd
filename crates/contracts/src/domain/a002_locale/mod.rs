pub mod aggregate;

pub use aggregate::Locale;
