use contracts::domain::a001_attribute::Attribute;
use contracts::domain::a002_locale::Locale;
use contracts::domain::a003_channel::Channel;
use contracts::domain::a005_product::Product;
use contracts::domain::a006_completeness::Completeness;

/// Everything a completeness record is built from
#[derive(Debug, Clone)]
pub struct CompletenessParts<'a> {
    pub product: &'a Product,
    pub channel: Channel,
    pub locale: Locale,
    pub missing_attributes: Vec<Attribute>,
    pub missing_count: usize,
    pub required_count: usize,
}

/// Builds the concrete completeness representation handed back to the caller
pub trait CompletenessFactory: Send + Sync {
    type Output;

    fn create(&self, parts: CompletenessParts<'_>) -> Self::Output;
}

/// Builds [`Completeness`] records
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCompletenessFactory;

impl CompletenessFactory for DefaultCompletenessFactory {
    type Output = Completeness;

    fn create(&self, parts: CompletenessParts<'_>) -> Completeness {
        Completeness::new(
            parts.product.base.id,
            parts.channel,
            parts.locale,
            parts.missing_attributes,
            parts.missing_count,
            parts.required_count,
        )
    }
}

/// Adapts a closure into a factory
#[derive(Debug, Clone, Copy)]
pub struct FnCompletenessFactory<F>(pub F);

impl<F, T> CompletenessFactory for FnCompletenessFactory<F>
where
    F: Fn(CompletenessParts<'_>) -> T + Send + Sync,
{
    type Output = T;

    fn create(&self, parts: CompletenessParts<'_>) -> T {
        (self.0)(parts)
    }
}
