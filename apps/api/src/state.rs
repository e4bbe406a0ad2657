use std::sync::Arc;

use sqlx::PgPool;

use crate::assessment::classify::PersonalityClassifier;
use crate::llm_client::LlmClient;
use crate::models::assessment::PersonalityTraits;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable archetype classifier for the questionnaire path.
    /// Default: ThresholdClassifier.
    pub classifier: Arc<dyn PersonalityClassifier<Traits = PersonalityTraits>>,
}
