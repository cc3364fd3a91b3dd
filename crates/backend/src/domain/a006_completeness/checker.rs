//! Value completeness checks
//!
//! A value is complete when it has data and the rule registered for its
//! attribute type accepts that data for the channel/locale. An attribute
//! type without a registered rule is an error, not an incomplete value.

use contracts::domain::a002_locale::Locale;
use contracts::domain::a003_channel::Channel;
use contracts::domain::a005_product::{Value, ValueData};
use contracts::enums::AttributeType;

use super::error::CheckerError;
use crate::shared::config::CompletenessConfig;

/// Decides whether one stored value counts as filled
pub trait ValueCompleteChecker: Send + Sync {
    fn is_complete(
        &self,
        value: &Value,
        channel: &Channel,
        locale: &Locale,
    ) -> Result<bool, CheckerError>;
}

/// Completeness rule for the data of some attribute types
pub trait AttributeTypeChecker: Send + Sync {
    fn supports(&self, attribute_type: AttributeType) -> bool;

    /// Called only with values that carry data
    fn is_complete(
        &self,
        value: &Value,
        data: &ValueData,
        channel: &Channel,
        locale: &Locale,
    ) -> Result<bool, CheckerError>;
}

fn mismatch(value: &Value, expected: &'static str, data: &ValueData) -> CheckerError {
    CheckerError::DataTypeMismatch {
        attribute: value.attribute_code().to_string(),
        expected,
        actual: data.kind(),
    }
}

// ============================================================================
// Built-in rules
// ============================================================================

/// Identifier, text and textarea: non-empty string
#[derive(Debug, Clone, Copy)]
pub struct TextChecker {
    pub whitespace_is_empty: bool,
}

impl AttributeTypeChecker for TextChecker {
    fn supports(&self, attribute_type: AttributeType) -> bool {
        matches!(
            attribute_type,
            AttributeType::Identifier | AttributeType::Text | AttributeType::Textarea
        )
    }

    fn is_complete(
        &self,
        value: &Value,
        data: &ValueData,
        _channel: &Channel,
        _locale: &Locale,
    ) -> Result<bool, CheckerError> {
        match data {
            ValueData::Text(text) if self.whitespace_is_empty => Ok(!text.trim().is_empty()),
            ValueData::Text(text) => Ok(!text.is_empty()),
            other => Err(mismatch(value, "text", other)),
        }
    }
}

/// Number, date and boolean: any data of the right kind
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarChecker;

impl AttributeTypeChecker for ScalarChecker {
    fn supports(&self, attribute_type: AttributeType) -> bool {
        matches!(
            attribute_type,
            AttributeType::Number | AttributeType::Date | AttributeType::Boolean
        )
    }

    fn is_complete(
        &self,
        value: &Value,
        data: &ValueData,
        _channel: &Channel,
        _locale: &Locale,
    ) -> Result<bool, CheckerError> {
        match (value.attribute().attribute_type, data) {
            (AttributeType::Number, ValueData::Number(n)) => Ok(!n.is_nan()),
            (AttributeType::Date, ValueData::Date(_)) => Ok(true),
            (AttributeType::Boolean, ValueData::Boolean(_)) => Ok(true),
            (AttributeType::Number, other) => Err(mismatch(value, "number", other)),
            (AttributeType::Date, other) => Err(mismatch(value, "date", other)),
            (_, other) => Err(mismatch(value, "boolean", other)),
        }
    }
}

/// Simple select: an option code; multi select: at least one option
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectChecker;

impl AttributeTypeChecker for SelectChecker {
    fn supports(&self, attribute_type: AttributeType) -> bool {
        matches!(
            attribute_type,
            AttributeType::SimpleSelect | AttributeType::MultiSelect
        )
    }

    fn is_complete(
        &self,
        value: &Value,
        data: &ValueData,
        _channel: &Channel,
        _locale: &Locale,
    ) -> Result<bool, CheckerError> {
        match (value.attribute().attribute_type, data) {
            (AttributeType::SimpleSelect, ValueData::OptionCode(code)) => Ok(!code.trim().is_empty()),
            (AttributeType::MultiSelect, ValueData::OptionCodes(codes)) => {
                Ok(codes.iter().any(|c| !c.trim().is_empty()))
            }
            (AttributeType::SimpleSelect, other) => Err(mismatch(value, "option", other)),
            (_, other) => Err(mismatch(value, "options", other)),
        }
    }
}

/// Metric: both amount and unit
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricChecker;

impl AttributeTypeChecker for MetricChecker {
    fn supports(&self, attribute_type: AttributeType) -> bool {
        attribute_type == AttributeType::Metric
    }

    fn is_complete(
        &self,
        value: &Value,
        data: &ValueData,
        _channel: &Channel,
        _locale: &Locale,
    ) -> Result<bool, CheckerError> {
        match data {
            ValueData::Metric { amount, unit } => Ok(amount.is_some()
                && unit.as_deref().map_or(false, |u| !u.trim().is_empty())),
            other => Err(mismatch(value, "metric", other)),
        }
    }
}

/// Price collection: an amount for every currency of the channel
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCollectionChecker;

impl AttributeTypeChecker for PriceCollectionChecker {
    fn supports(&self, attribute_type: AttributeType) -> bool {
        attribute_type == AttributeType::PriceCollection
    }

    fn is_complete(
        &self,
        value: &Value,
        data: &ValueData,
        channel: &Channel,
        _locale: &Locale,
    ) -> Result<bool, CheckerError> {
        match data {
            ValueData::Prices(prices) => Ok(channel.currencies().iter().all(|currency| {
                prices
                    .iter()
                    .any(|p| &p.currency == currency && p.amount.is_some())
            })),
            other => Err(mismatch(value, "prices", other)),
        }
    }
}

/// Image and file: a stored file with its original name
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaChecker;

impl AttributeTypeChecker for MediaChecker {
    fn supports(&self, attribute_type: AttributeType) -> bool {
        matches!(attribute_type, AttributeType::Image | AttributeType::File)
    }

    fn is_complete(
        &self,
        value: &Value,
        data: &ValueData,
        _channel: &Channel,
        _locale: &Locale,
    ) -> Result<bool, CheckerError> {
        match data {
            ValueData::Media(media) => Ok(media
                .original_filename
                .as_deref()
                .map_or(false, |name| !name.trim().is_empty())),
            other => Err(mismatch(value, "media", other)),
        }
    }
}

// ============================================================================
// Chain
// ============================================================================

/// Dispatches each value to the first registered rule supporting its
/// attribute type
#[derive(Default)]
pub struct ChainedValueCompleteChecker {
    checkers: Vec<Box<dyn AttributeTypeChecker>>,
}

impl ChainedValueCompleteChecker {
    /// Empty chain; every attribute type is unsupported until registered
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self::from_config(&CompletenessConfig::default())
    }

    pub fn from_config(config: &CompletenessConfig) -> Self {
        Self::new()
            .register(TextChecker {
                whitespace_is_empty: config.whitespace_text_is_empty,
            })
            .register(ScalarChecker)
            .register(SelectChecker)
            .register(MetricChecker)
            .register(PriceCollectionChecker)
            .register(MediaChecker)
    }

    pub fn register(mut self, checker: impl AttributeTypeChecker + 'static) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    pub fn supports(&self, attribute_type: AttributeType) -> bool {
        self.checkers.iter().any(|c| c.supports(attribute_type))
    }
}

impl std::fmt::Debug for ChainedValueCompleteChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedValueCompleteChecker")
            .field("checkers", &self.checkers.len())
            .finish()
    }
}

impl ValueCompleteChecker for ChainedValueCompleteChecker {
    fn is_complete(
        &self,
        value: &Value,
        channel: &Channel,
        locale: &Locale,
    ) -> Result<bool, CheckerError> {
        let attribute = value.attribute();
        let checker = self
            .checkers
            .iter()
            .find(|c| c.supports(attribute.attribute_type))
            .ok_or_else(|| CheckerError::UnsupportedAttributeType {
                attribute: attribute.code().to_string(),
                attribute_type: attribute.attribute_type,
            })?;

        match value.data() {
            Some(data) => checker.is_complete(value, data, channel, locale),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_completeness::fixtures::*;
    use contracts::domain::a001_attribute::Attribute;
    use contracts::domain::a005_product::{Media, Price};

    fn check(value: &Value) -> Result<bool, CheckerError> {
        ChainedValueCompleteChecker::with_defaults().is_complete(
            value,
            &mobile(),
            &Locale::new("en_US"),
        )
    }

    fn global(attribute: Attribute, data: Option<ValueData>) -> Value {
        Value::new(attribute, None, None, data)
    }

    #[test]
    fn test_value_without_data_is_incomplete() {
        assert_eq!(check(&global(name(), None)), Ok(false));
    }

    #[test]
    fn test_text_rules() {
        assert_eq!(check(&text_value(name(), None, None, "Boots")), Ok(true));
        assert_eq!(check(&text_value(name(), None, None, "")), Ok(false));
        assert_eq!(check(&text_value(name(), None, None, "   ")), Ok(false));

        let lenient = ChainedValueCompleteChecker::from_config(&CompletenessConfig {
            whitespace_text_is_empty: false,
        });
        assert_eq!(
            lenient.is_complete(
                &text_value(name(), None, None, "   "),
                &mobile(),
                &Locale::new("en_US")
            ),
            Ok(true)
        );
    }

    #[test]
    fn test_price_collection_needs_every_channel_currency() {
        let only_usd = global(
            price(),
            Some(ValueData::Prices(vec![Price::new("USD", Some(99.0))])),
        );
        let both = global(
            price(),
            Some(ValueData::Prices(vec![
                Price::new("USD", Some(99.0)),
                Price::new("EUR", Some(89.0)),
            ])),
        );
        let empty_eur = global(
            price(),
            Some(ValueData::Prices(vec![
                Price::new("USD", Some(99.0)),
                Price::new("EUR", None),
            ])),
        );

        assert_eq!(check(&only_usd), Ok(false));
        assert_eq!(check(&both), Ok(true));
        assert_eq!(check(&empty_eur), Ok(false));
    }

    #[test]
    fn test_metric_needs_amount_and_unit() {
        let metric = |amount: Option<f64>, unit: Option<&str>| {
            global(
                weight(),
                Some(ValueData::Metric {
                    amount,
                    unit: unit.map(str::to_string),
                }),
            )
        };

        assert_eq!(check(&metric(Some(1.2), Some("KILOGRAM"))), Ok(true));
        assert_eq!(check(&metric(None, Some("KILOGRAM"))), Ok(false));
        assert_eq!(check(&metric(Some(1.2), None)), Ok(false));
    }

    #[test]
    fn test_select_and_media_rules() {
        let color = Attribute::new("color", AttributeType::SimpleSelect);
        let sizes = Attribute::new("sizes", AttributeType::MultiSelect);

        assert_eq!(
            check(&global(color, Some(ValueData::OptionCode("red".into())))),
            Ok(true)
        );
        assert_eq!(check(&global(sizes, Some(ValueData::OptionCodes(vec![])))), Ok(false));

        let media = |name: Option<&str>| {
            global(
                picture(),
                Some(ValueData::Media(Media {
                    original_filename: name.map(str::to_string),
                    path: Some("a/b/c/boots.jpg".into()),
                })),
            )
        };
        assert_eq!(check(&media(Some("boots.jpg"))), Ok(true));
        assert_eq!(check(&media(None)), Ok(false));
    }

    #[test]
    fn test_scalar_rules() {
        let released = Attribute::new("release_date", AttributeType::Date);
        let waterproof = Attribute::new("waterproof", AttributeType::Boolean);
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(check(&global(released, Some(ValueData::Date(date)))), Ok(true));
        assert_eq!(
            check(&global(waterproof, Some(ValueData::Boolean(false)))),
            Ok(true)
        );
    }

    #[test]
    fn test_mismatched_data_is_an_error() {
        let err = check(&global(weight(), Some(ValueData::Text("heavy".into())))).unwrap_err();
        assert_eq!(
            err,
            CheckerError::DataTypeMismatch {
                attribute: "weight".into(),
                expected: "metric",
                actual: "text",
            }
        );
    }

    #[test]
    fn test_unregistered_type_is_an_error() {
        let chain = ChainedValueCompleteChecker::new().register(TextChecker {
            whitespace_is_empty: true,
        });
        assert!(chain.supports(AttributeType::Text));
        assert!(!chain.supports(AttributeType::Metric));

        let err = chain
            .is_complete(&global(weight(), None), &mobile(), &Locale::new("en_US"))
            .unwrap_err();
        assert!(matches!(
            err,
            CheckerError::UnsupportedAttributeType {
                attribute_type: AttributeType::Metric,
                ..
            }
        ));
    }
}
