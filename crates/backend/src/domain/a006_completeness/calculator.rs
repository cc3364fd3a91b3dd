use contracts::domain::a005_product::Product;
use contracts::domain::common::AggregateRoot;
use std::sync::Arc;

use super::checker::ValueCompleteChecker;
use super::error::CompletenessError;
use super::factory::{CompletenessFactory, CompletenessParts, DefaultCompletenessFactory};
use super::missing_attributes_calculator::{MissingBucket, MissingRequiredAttributesCalculator};
use super::repository::{ChannelRepository, LocaleRepository};
use super::required_values::RequiredValuesGenerator;

/// Calculates the completenesses of a product.
///
/// Builds the required slots of the product family, compares them with the
/// product values and emits one completeness per channel/locale pair the
/// family requires something on. Records come out channel by channel, in the
/// order the pairs first appear in the family requirements.
///
/// Every call works on fresh transient structures; the calculator holds only
/// read-only collaborators and can be shared between threads.
#[derive(Clone)]
pub struct CompletenessCalculator<F = DefaultCompletenessFactory> {
    generator: RequiredValuesGenerator,
    missing_calculator: MissingRequiredAttributesCalculator,
    factory: F,
}

impl CompletenessCalculator<DefaultCompletenessFactory> {
    pub fn with_default_factory(
        checker: Arc<dyn ValueCompleteChecker>,
        channels: Arc<dyn ChannelRepository>,
        locales: Arc<dyn LocaleRepository>,
    ) -> Self {
        Self::with_factory(checker, channels, locales, DefaultCompletenessFactory)
    }
}

impl<F: CompletenessFactory> CompletenessCalculator<F> {
    pub fn new(
        generator: RequiredValuesGenerator,
        missing_calculator: MissingRequiredAttributesCalculator,
        factory: F,
    ) -> Self {
        Self {
            generator,
            missing_calculator,
            factory,
        }
    }

    pub fn with_factory(
        checker: Arc<dyn ValueCompleteChecker>,
        channels: Arc<dyn ChannelRepository>,
        locales: Arc<dyn LocaleRepository>,
        factory: F,
    ) -> Self {
        let missing_calculator = MissingRequiredAttributesCalculator::new(checker, channels, locales);
        Self::new(RequiredValuesGenerator::new(), missing_calculator, factory)
    }

    /// Completenesses of the product; empty when it has no family.
    pub fn calculate(&self, product: &Product) -> Result<Vec<F::Output>, CompletenessError> {
        let Some(family) = product.family() else {
            tracing::debug!("product {} has no family, no completeness", product.code());
            return Ok(Vec::new());
        };

        let required_values = self.generator.generate(family);
        let missing_attributes = self
            .missing_calculator
            .generate(product.values(), &required_values)?;

        let completenesses: Vec<F::Output> = missing_attributes
            .into_buckets()
            .map(|bucket| {
                let MissingBucket {
                    channel,
                    locale,
                    required_count,
                    missing,
                } = bucket;
                let missing_count = missing.len();
                self.factory.create(CompletenessParts {
                    product,
                    channel,
                    locale,
                    missing_attributes: missing.into_attributes(),
                    missing_count,
                    required_count,
                })
            })
            .collect();

        tracing::debug!(
            "product {} (family {}): {} completenesses calculated",
            product.code(),
            family.code(),
            completenesses.len()
        );

        Ok(completenesses)
    }
}
