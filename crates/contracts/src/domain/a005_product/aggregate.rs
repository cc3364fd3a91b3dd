use crate::domain::a004_family::Family;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value::Value;
use super::value_collection::ValueCollection;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога. В `base.code` хранится идентификатор товара (SKU)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub family: Option<Family>,

    #[serde(default)]
    pub values: ValueCollection,
}

impl Product {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), identifier.clone(), identifier),
            family: None,
            values: ValueCollection::new(),
        }
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.family = Some(family);
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.add_value(value);
        self
    }

    pub fn identifier(&self) -> &str {
        &self.base.code
    }

    pub fn family(&self) -> Option<&Family> {
        self.family.as_ref()
    }

    pub fn values(&self) -> &ValueCollection {
        &self.values
    }

    /// Добавить значение; значение с тем же ключом уже сохранено - остается старое
    pub fn add_value(&mut self, value: Value) -> bool {
        self.values.add(value)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Product identifier cannot be empty".into());
        }
        for value in &self.values {
            value.validate()?;
        }
        if let Some(family) = &self.family {
            family.validate()?;
        }
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "product"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_attribute::Attribute;
    use crate::domain::a005_product::value::ValueData;
    use crate::enums::AttributeType;

    #[test]
    fn test_new_product_has_no_family() {
        let product = Product::new("sku-001");
        assert_eq!(product.identifier(), "sku-001");
        assert!(product.family().is_none());
        assert!(product.values().is_empty());
        assert_eq!(Product::full_name(), "a005_product");
    }

    #[test]
    fn test_validate_checks_values() {
        let name = Attribute::new("name", AttributeType::Text);
        let product = Product::new("sku-001").with_value(Value::new(
            name,
            None,
            Some("en_US".into()),
            Some(ValueData::Text("Boots".into())),
        ));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_deserialize_product_snapshot() {
        let json = r#"{
            "id": "0b7c6a2e-3f43-4c71-9d0e-5b8f1b1b2a10",
            "code": "sku-001",
            "description": "Leather boots",
            "comment": null,
            "metadata": {
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
                "is_deleted": false,
                "version": 1
            },
            "family": null,
            "values": [
                {
                    "attribute": {"code": "name", "type": "Text"},
                    "scope": null,
                    "locale": null,
                    "data": {"kind": "text", "data": "Leather boots"}
                }
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.identifier(), "sku-001");
        assert!(product.values().get_by_codes("name", None, None).is_some());
    }
}
