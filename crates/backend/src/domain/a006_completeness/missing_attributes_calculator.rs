use contracts::domain::a002_locale::Locale;
use contracts::domain::a003_channel::Channel;
use contracts::domain::a005_product::ValueCollection;
use std::sync::Arc;

use super::checker::ValueCompleteChecker;
use super::error::CompletenessError;
use super::matrix::ChannelLocaleMatrix;
use super::missing_required_attributes::MissingRequiredAttributes;
use super::repository::{ChannelRepository, LocaleRepository};

/// Missing attributes of one channel/locale pair, with the channel and
/// locale records the slots were checked against
#[derive(Debug, Clone, PartialEq)]
pub struct MissingBucket {
    pub channel: Channel,
    pub locale: Locale,
    pub required_count: usize,
    pub missing: MissingRequiredAttributes,
}

/// Compares the required slots of every channel/locale bucket with the
/// product values and collects the attributes that are absent or not
/// complete.
#[derive(Clone)]
pub struct MissingRequiredAttributesCalculator {
    checker: Arc<dyn ValueCompleteChecker>,
    channels: Arc<dyn ChannelRepository>,
    locales: Arc<dyn LocaleRepository>,
}

impl MissingRequiredAttributesCalculator {
    pub fn new(
        checker: Arc<dyn ValueCompleteChecker>,
        channels: Arc<dyn ChannelRepository>,
        locales: Arc<dyn LocaleRepository>,
    ) -> Self {
        Self {
            checker,
            channels,
            locales,
        }
    }

    pub fn generate(
        &self,
        product_values: &ValueCollection,
        required_values: &ChannelLocaleMatrix<ValueCollection>,
    ) -> Result<ChannelLocaleMatrix<MissingBucket>, CompletenessError> {
        let mut missing = ChannelLocaleMatrix::new();

        for (channel_code, locale_code, required) in required_values.iter() {
            let channel = resolve_channel(self.channels.as_ref(), channel_code)?;
            let locale = resolve_locale(self.locales.as_ref(), locale_code)?;

            let mut bucket = MissingRequiredAttributes::new();
            for required_value in required {
                let attribute = required_value.attribute();
                let product_value = product_values.get_by_codes(
                    attribute.code(),
                    required_value.scope(),
                    required_value.locale(),
                );

                let complete = match product_value {
                    Some(value) => self
                        .checker
                        .is_complete(value, &channel, &locale)
                        .map_err(|source| CompletenessError::Checker {
                            attribute: attribute.code().to_string(),
                            channel: channel_code.to_string(),
                            locale: locale_code.to_string(),
                            source,
                        })?,
                    None => false,
                };

                if !complete {
                    bucket.add(attribute);
                }
            }

            tracing::debug!(
                "{}/{}: {} of {} required attributes missing",
                channel_code,
                locale_code,
                bucket.len(),
                required.len()
            );

            let required_count = required.len();
            missing.get_or_insert_with(channel_code, locale_code, || MissingBucket {
                channel,
                locale,
                required_count,
                missing: bucket,
            });
        }

        Ok(missing)
    }
}

fn resolve_channel(
    channels: &dyn ChannelRepository,
    code: &str,
) -> Result<Channel, CompletenessError> {
    channels
        .find_one_by_identifier(code)
        .ok_or_else(|| CompletenessError::UnknownChannel(code.to_string()))
}

fn resolve_locale(
    locales: &dyn LocaleRepository,
    code: &str,
) -> Result<Locale, CompletenessError> {
    locales
        .find_one_by_identifier(code)
        .ok_or_else(|| CompletenessError::UnknownLocale(code.to_string()))
}
