pub mod aggregate;

pub use aggregate::{AttributeRequirement, Family, FamilyId};
