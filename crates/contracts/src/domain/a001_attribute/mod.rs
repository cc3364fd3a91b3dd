pub mod aggregate;

pub use aggregate::Attribute;
