//! Insight agent: builds the prompt, dispatches it to the configured backend
//! and folds every outcome into an [`InsightResult`].

use salesdash_core::{AnalysisContext, InsightsConfig, WeeklyData};
use serde::Serialize;

use crate::backend::{Backend, CompletionBackend};
use crate::error::InsightError;
use crate::prompt::build_prompt;
use crate::result::InsightResult;

/// Generates sales insights with a single completion backend.
///
/// The backend is fixed at construction. The agent holds no mutable state, so
/// one instance can serve concurrent requests behind an `Arc`.
#[derive(Debug)]
pub struct InsightsAgent<B = Backend> {
    backend: B,
}

impl InsightsAgent<Backend> {
    /// Build an agent using the backend selected by `config.use_local`.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &InsightsConfig) -> Result<Self, InsightError> {
        Ok(Self::with_backend(Backend::from_config(config)?))
    }
}

impl<B: CompletionBackend> InsightsAgent<B> {
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Analyze an arbitrary payload framed by `context`.
    ///
    /// Issues exactly one backend request. Never fails: errors come back as
    /// [`InsightResult::Failure`].
    pub async fn analyze<T>(&self, data: &T, context: &AnalysisContext) -> InsightResult
    where
        T: Serialize + ?Sized + Sync,
    {
        let prompt = match build_prompt(data, context) {
            Ok(prompt) => prompt,
            Err(e) => return self.fail(context, InsightError::Payload(e)),
        };

        tracing::debug!(
            brand = %context.brand,
            period = %context.period,
            model = self.backend.model_label(),
            prompt_chars = prompt.chars().count(),
            "requesting insight"
        );

        match self.backend.complete(&prompt).await {
            Ok(text) => InsightResult::from_completion(Ok(text), self.backend.model_label()),
            Err(e) => self.fail(context, e),
        }
    }

    /// Insights for a single brand of `data`.
    ///
    /// The raw brand record is sent as the payload. An unknown `brand_key`
    /// returns a lookup failure without contacting the backend.
    pub async fn generate_brand_insights(
        &self,
        data: &WeeklyData,
        brand_key: &str,
    ) -> InsightResult {
        let Some(record) = data.brand(brand_key) else {
            let context = AnalysisContext {
                brand: brand_key.to_string(),
                ..AnalysisContext::default()
            };
            return self.fail(&context, InsightError::BrandNotFound(brand_key.to_string()));
        };

        let context = AnalysisContext::for_brand(data, brand_key, record);
        self.analyze(record, &context).await
    }

    /// Insights across all brands of `data`, based on summed sales and forecast.
    pub async fn generate_overall_insights(&self, data: &WeeklyData) -> InsightResult {
        let summary = data.summary();
        let context = AnalysisContext::overall(data);

        tracing::debug!(
            brands = summary.brands.len(),
            total_sales = summary.total_sales,
            total_forecast = summary.total_forecast,
            "aggregated weekly data"
        );

        self.analyze(&summary, &context).await
    }

    fn fail(&self, context: &AnalysisContext, error: InsightError) -> InsightResult {
        tracing::warn!(
            brand = %context.brand,
            model = self.backend.model_label(),
            kind = %error.kind(),
            error = %error,
            "insight request failed"
        );
        error.into()
    }
}
