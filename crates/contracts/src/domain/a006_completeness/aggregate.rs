use serde::{Deserialize, Serialize};

use crate::domain::a001_attribute::Attribute;
use crate::domain::a002_locale::Locale;
use crate::domain::a003_channel::Channel;
use crate::domain::a005_product::ProductId;

/// Полнота заполнения товара для пары канал/локаль
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completeness {
    #[serde(rename = "productId")]
    pub product_id: ProductId,

    pub channel: Channel,

    pub locale: Locale,

    /// Незаполненные обязательные атрибуты в порядке обнаружения
    #[serde(rename = "missingAttributes")]
    pub missing_attributes: Vec<Attribute>,

    #[serde(rename = "missingCount")]
    pub missing_count: usize,

    #[serde(rename = "requiredCount")]
    pub required_count: usize,
}

impl Completeness {
    pub fn new(
        product_id: ProductId,
        channel: Channel,
        locale: Locale,
        missing_attributes: Vec<Attribute>,
        missing_count: usize,
        required_count: usize,
    ) -> Self {
        debug_assert!(missing_count <= required_count);
        Self {
            product_id,
            channel,
            locale,
            missing_attributes,
            missing_count,
            required_count,
        }
    }

    /// Процент заполненных обязательных атрибутов, с округлением вниз
    pub fn ratio(&self) -> u8 {
        if self.required_count == 0 {
            return 100;
        }
        let filled = self.required_count.saturating_sub(self.missing_count);
        (100 * filled / self.required_count) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.missing_count == 0
    }

    pub fn missing_attribute_codes(&self) -> Vec<&str> {
        self.missing_attributes.iter().map(Attribute::code).collect()
    }

    pub fn channel_code(&self) -> &str {
        &self.channel.code
    }

    pub fn locale_code(&self) -> &str {
        &self.locale.code
    }
}

/// Плоское представление для передачи и хранения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessDto {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "channelCode")]
    pub channel_code: String,
    #[serde(rename = "localeCode")]
    pub locale_code: String,
    #[serde(rename = "missingAttributeCodes")]
    pub missing_attribute_codes: Vec<String>,
    #[serde(rename = "missingCount")]
    pub missing_count: usize,
    #[serde(rename = "requiredCount")]
    pub required_count: usize,
    pub ratio: u8,
}

impl From<&Completeness> for CompletenessDto {
    fn from(c: &Completeness) -> Self {
        Self {
            product_id: c.product_id.to_string(),
            channel_code: c.channel_code().to_string(),
            locale_code: c.locale_code().to_string(),
            missing_attribute_codes: c
                .missing_attribute_codes()
                .into_iter()
                .map(str::to_string)
                .collect(),
            missing_count: c.missing_count,
            required_count: c.required_count,
            ratio: c.ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AttributeType;

    fn completeness(missing: Vec<Attribute>, required_count: usize) -> Completeness {
        let missing_count = missing.len();
        Completeness::new(
            ProductId::new_v4(),
            Channel::new("mobile", vec![Locale::new("en_US")]),
            Locale::new("en_US"),
            missing,
            missing_count,
            required_count,
        )
    }

    #[test]
    fn test_ratio_rounds_down() {
        let missing = vec![Attribute::new("name", AttributeType::Text)];
        assert_eq!(completeness(missing.clone(), 3).ratio(), 66);
        assert_eq!(completeness(missing, 1).ratio(), 0);
        assert_eq!(completeness(vec![], 4).ratio(), 100);
        assert_eq!(completeness(vec![], 0).ratio(), 100);
    }

    #[test]
    fn test_dto_flattens_codes() {
        let c = completeness(
            vec![
                Attribute::new("name", AttributeType::Text),
                Attribute::new("price", AttributeType::PriceCollection),
            ],
            4,
        );
        let dto = CompletenessDto::from(&c);

        assert_eq!(dto.channel_code, "mobile");
        assert_eq!(dto.locale_code, "en_US");
        assert_eq!(dto.missing_attribute_codes, vec!["name", "price"]);
        assert_eq!(dto.ratio, 50);
        assert!(!c.is_complete());

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["requiredCount"], 4);
        assert_eq!(json["missingAttributeCodes"][1], "price");
    }
}
