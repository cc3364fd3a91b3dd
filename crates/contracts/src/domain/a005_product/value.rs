use serde::{Deserialize, Serialize};

use crate::domain::a001_attribute::Attribute;

/// Сумма в одной валюте
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub currency: String,
    pub amount: Option<f64>,
}

impl Price {
    pub fn new(currency: impl Into<String>, amount: Option<f64>) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}

/// Ссылка на сохраненный файл (изображение или файл)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "originalFilename")]
    pub original_filename: Option<String>,
    pub path: Option<String>,
}

/// Типизированные данные значения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ValueData {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(chrono::NaiveDate),
    /// Простой выбор: код одной опции
    #[serde(rename = "option")]
    OptionCode(String),
    /// Множественный выбор: коды опций
    #[serde(rename = "options")]
    OptionCodes(Vec<String>),
    Metric {
        amount: Option<f64>,
        unit: Option<String>,
    },
    Prices(Vec<Price>),
    Media(Media),
}

impl ValueData {
    pub fn kind(&self) -> &'static str {
        match self {
            ValueData::Text(_) => "text",
            ValueData::Number(_) => "number",
            ValueData::Boolean(_) => "boolean",
            ValueData::Date(_) => "date",
            ValueData::OptionCode(_) => "option",
            ValueData::OptionCodes(_) => "options",
            ValueData::Metric { .. } => "metric",
            ValueData::Prices(_) => "prices",
            ValueData::Media(_) => "media",
        }
    }
}

/// Ключ сопоставления значения: (код атрибута, канал, локаль)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ValueKey {
    pub attribute_code: String,
    pub scope: Option<String>,
    pub locale: Option<String>,
}

impl ValueKey {
    pub fn new(attribute_code: &str, scope: Option<&str>, locale: Option<&str>) -> Self {
        Self {
            attribute_code: attribute_code.to_string(),
            scope: scope.map(str::to_string),
            locale: locale.map(str::to_string),
        }
    }
}

impl std::fmt::Display for ValueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.attribute_code,
            self.scope.as_deref().unwrap_or("<all_channels>"),
            self.locale.as_deref().unwrap_or("<all_locales>")
        )
    }
}

/// Конкретное значение атрибута товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub attribute: Attribute,
    pub scope: Option<String>,
    pub locale: Option<String>,
    pub data: Option<ValueData>,
}

impl Value {
    pub fn new(
        attribute: Attribute,
        scope: Option<String>,
        locale: Option<String>,
        data: Option<ValueData>,
    ) -> Self {
        Self {
            attribute,
            scope,
            locale,
            data,
        }
    }

    /// Пустой слот атрибута для пары канал/локаль. Канал сохраняется только
    /// для scopable атрибутов, локаль только для localizable
    pub fn required_slot(attribute: &Attribute, channel_code: &str, locale_code: &str) -> Self {
        Self {
            scope: attribute.is_scopable().then(|| channel_code.to_string()),
            locale: attribute.is_localizable().then(|| locale_code.to_string()),
            attribute: attribute.clone(),
            data: None,
        }
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn attribute_code(&self) -> &str {
        &self.attribute.code
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn data(&self) -> Option<&ValueData> {
        self.data.as_ref()
    }

    pub fn key(&self) -> ValueKey {
        ValueKey::new(self.attribute_code(), self.scope(), self.locale())
    }

    /// Канал только у scopable атрибутов, локаль только у localizable
    pub fn validate(&self) -> Result<(), String> {
        if self.scope.is_some() != self.attribute.is_scopable() {
            return Err(format!(
                "Value '{}': scope must be set if and only if the attribute is scopable",
                self.key()
            ));
        }
        if self.locale.is_some() != self.attribute.is_localizable() {
            return Err(format!(
                "Value '{}': locale must be set if and only if the attribute is localizable",
                self.key()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AttributeType;

    #[test]
    fn test_required_slot_follows_modifiers() {
        let name = Attribute::new("name", AttributeType::Text);
        let short = Attribute::new("short_description", AttributeType::Text).with_scopable(true);
        let long = Attribute::new("long_description", AttributeType::Textarea)
            .with_scopable(true)
            .with_localizable(true);

        assert_eq!(
            Value::required_slot(&name, "mobile", "en_US").key(),
            ValueKey::new("name", None, None)
        );
        assert_eq!(
            Value::required_slot(&short, "mobile", "en_US").key(),
            ValueKey::new("short_description", Some("mobile"), None)
        );
        let slot = Value::required_slot(&long, "mobile", "en_US");
        assert_eq!(
            slot.key(),
            ValueKey::new("long_description", Some("mobile"), Some("en_US"))
        );
        assert!(slot.data().is_none());
        assert!(slot.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_scope_on_global_attribute() {
        let name = Attribute::new("name", AttributeType::Text);
        let value = Value::new(
            name,
            Some("mobile".into()),
            None,
            Some(ValueData::Text("Boots".into())),
        );
        assert!(value.validate().is_err());
    }

    #[test]
    fn test_key_display() {
        let key = ValueKey::new("description", Some("print"), None);
        assert_eq!(key.to_string(), "description-print-<all_locales>");
    }

    #[test]
    fn test_value_data_serialization_is_tagged() {
        let json = serde_json::to_value(ValueData::Text("Boots".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "text", "data": "Boots"}));
    }
}
