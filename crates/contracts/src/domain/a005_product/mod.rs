pub mod aggregate;
pub mod value;
pub mod value_collection;

pub use aggregate::{Product, ProductId};
pub use value::{Media, Price, Value, ValueData, ValueKey};
pub use value_collection::ValueCollection;
