//! Catalog fixtures shared by the completeness tests
//!
//! Channels: "mobile" (en_US, fr_FR; USD, EUR) and "print" (en_US, de_DE; EUR).

use contracts::domain::a001_attribute::Attribute;
use contracts::domain::a002_locale::Locale;
use contracts::domain::a003_channel::Channel;
use contracts::domain::a004_family::AttributeRequirement;
use contracts::domain::a005_product::{Price, Value, ValueData};
use contracts::enums::AttributeType;
use std::sync::Arc;

use super::calculator::CompletenessCalculator;
use super::checker::ChainedValueCompleteChecker;
use super::repository::{
    ChannelRepository, InMemoryChannelRepository, InMemoryLocaleRepository, LocaleRepository,
};

pub fn mobile() -> Channel {
    Channel::new("mobile", vec![Locale::new("en_US"), Locale::new("fr_FR")])
        .with_currencies(["USD", "EUR"])
}

pub fn print() -> Channel {
    Channel::new("print", vec![Locale::new("en_US"), Locale::new("de_DE")]).with_currencies(["EUR"])
}

pub fn name() -> Attribute {
    Attribute::new("name", AttributeType::Text)
}

pub fn short_description() -> Attribute {
    Attribute::new("short_description", AttributeType::Text).with_scopable(true)
}

pub fn long_description() -> Attribute {
    Attribute::new("long_description", AttributeType::Textarea)
        .with_scopable(true)
        .with_localizable(true)
}

pub fn description() -> Attribute {
    Attribute::new("description", AttributeType::Textarea)
        .with_scopable(true)
        .with_localizable(true)
}

/// Localizable, only applies to fr_FR
pub fn french_regulation() -> Attribute {
    Attribute::new("french_regulation", AttributeType::Text)
        .with_localizable(true)
        .with_available_locales(["fr_FR"])
}

pub fn price() -> Attribute {
    Attribute::new("price", AttributeType::PriceCollection)
}

pub fn weight() -> Attribute {
    Attribute::new("weight", AttributeType::Metric)
}

pub fn picture() -> Attribute {
    Attribute::new("picture", AttributeType::Image)
}

pub fn required(attribute: Attribute, channel: Channel) -> AttributeRequirement {
    AttributeRequirement::new(attribute, channel, true)
}

pub fn text_value(
    attribute: Attribute,
    scope: Option<&str>,
    locale: Option<&str>,
    text: &str,
) -> Value {
    Value::new(
        attribute,
        scope.map(str::to_string),
        locale.map(str::to_string),
        Some(ValueData::Text(text.to_string())),
    )
}

/// Global price with only a USD amount
pub fn usd_only_price() -> Value {
    Value::new(
        price(),
        None,
        None,
        Some(ValueData::Prices(vec![Price::new("USD", Some(120.0))])),
    )
}

pub fn channel_repository() -> Arc<dyn ChannelRepository> {
    Arc::new(InMemoryChannelRepository::new([mobile(), print()]))
}

pub fn locale_repository() -> Arc<dyn LocaleRepository> {
    Arc::new(InMemoryLocaleRepository::from_channels(&[mobile(), print()]))
}

pub fn completeness_calculator() -> CompletenessCalculator {
    CompletenessCalculator::with_default_factory(
        Arc::new(ChainedValueCompleteChecker::with_defaults()),
        channel_repository(),
        locale_repository(),
    )
}
