pub mod attribute_type;

pub use attribute_type::AttributeType;
