use serde::{Deserialize, Serialize};

/// Типы атрибутов каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    Identifier,
    Text,
    Textarea,
    Number,
    Boolean,
    Date,
    SimpleSelect,
    MultiSelect,
    Metric,
    PriceCollection,
    Image,
    File,
}

impl AttributeType {
    /// Стабильный код типа
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::Identifier => "pim_catalog_identifier",
            AttributeType::Text => "pim_catalog_text",
            AttributeType::Textarea => "pim_catalog_textarea",
            AttributeType::Number => "pim_catalog_number",
            AttributeType::Boolean => "pim_catalog_boolean",
            AttributeType::Date => "pim_catalog_date",
            AttributeType::SimpleSelect => "pim_catalog_simpleselect",
            AttributeType::MultiSelect => "pim_catalog_multiselect",
            AttributeType::Metric => "pim_catalog_metric",
            AttributeType::PriceCollection => "pim_catalog_price_collection",
            AttributeType::Image => "pim_catalog_image",
            AttributeType::File => "pim_catalog_file",
        }
    }

    pub fn all() -> Vec<AttributeType> {
        vec![
            AttributeType::Identifier,
            AttributeType::Text,
            AttributeType::Textarea,
            AttributeType::Number,
            AttributeType::Boolean,
            AttributeType::Date,
            AttributeType::SimpleSelect,
            AttributeType::MultiSelect,
            AttributeType::Metric,
            AttributeType::PriceCollection,
            AttributeType::Image,
            AttributeType::File,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_code_resolves_back() {
        for t in AttributeType::all() {
            assert_eq!(AttributeType::from_code(t.code()), Some(t));
        }
        assert_eq!(AttributeType::from_code("pim_catalog_unknown"), None);
    }
}
