use contracts::domain::a004_family::Family;
use contracts::domain::a005_product::{Value, ValueCollection};
use contracts::domain::common::AggregateRoot;

use super::matrix::ChannelLocaleMatrix;

/// Builds the payload-less values a family requires, bucketed per channel
/// and per locale of that channel.
///
/// For channels "mobile" and "print", locales "en_US" and "fr_FR", and the
/// attributes
/// - `name` (global),
/// - `short_description` (scopable),
/// - `long_description` (scopable and localizable),
///
/// the "mobile"/"fr_FR" bucket holds the slots `name`,
/// `short_description-mobile` and `long_description-mobile-fr_FR`.
///
/// Locale-specific attributes only produce slots for their own locales.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequiredValuesGenerator;

impl RequiredValuesGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, family: &Family) -> ChannelLocaleMatrix<ValueCollection> {
        let mut values = ChannelLocaleMatrix::new();

        for requirement in family.attribute_requirements() {
            if !requirement.is_required() {
                continue;
            }

            let attribute = requirement.attribute();
            let channel_code = requirement.channel_code();

            for locale in requirement.channel().locales() {
                let locale_code = locale.code();
                if attribute.is_locale_specific() && !attribute.has_locale_specific(locale_code) {
                    continue;
                }

                let slot = Value::required_slot(attribute, channel_code, locale_code);
                let bucket =
                    values.get_or_insert_with(channel_code, locale_code, ValueCollection::new);
                if !bucket.add(slot) {
                    tracing::warn!(
                        "family {}: attribute {} is required twice on {}/{}, keeping one slot",
                        family.code(),
                        attribute.code(),
                        channel_code,
                        locale_code
                    );
                }
            }
        }

        values
    }
}
