use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::guidance::{
    fallback_gap_year_plan, fallback_recommendations, GapYearPlan, Recommendations,
};
use crate::llm_client::prompts::{gap_year_prompt, recommendations_prompt, JSON_ONLY_SYSTEM};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    pub student_profile: serde_json::Value,
}

/// POST /api/v1/recommendations/generate
///
/// LLM-generated when possible; structured-output failures fall back to the
/// fixed catalog so the client always gets a complete payload.
pub async fn handle_generate_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendationsRequest>,
) -> Result<Json<Recommendations>, AppError> {
    if req.student_profile.is_null() {
        return Err(AppError::Validation(
            "studentProfile must not be null".to_string(),
        ));
    }

    let prompt = recommendations_prompt(&req.student_profile);
    let recommendations = match state
        .llm
        .call_json::<Recommendations>(JSON_ONLY_SYSTEM, &prompt)
        .await
    {
        Ok(recs) => recs,
        Err(e) => {
            warn!("Recommendation generation failed, using fallback: {e}");
            fallback_recommendations()
        }
    };

    Ok(Json(recommendations))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapYearRequest {
    pub student_profile: serde_json::Value,
}

/// POST /api/v1/gap-year/plan
pub async fn handle_gap_year_plan(
    State(state): State<AppState>,
    Json(req): Json<GapYearRequest>,
) -> Result<Json<GapYearPlan>, AppError> {
    if req.student_profile.is_null() {
        return Err(AppError::Validation(
            "studentProfile must not be null".to_string(),
        ));
    }

    let prompt = gap_year_prompt(&req.student_profile);
    let plan = match state
        .llm
        .call_json::<GapYearPlan>(JSON_ONLY_SYSTEM, &prompt)
        .await
    {
        Ok(plan) => plan,
        Err(e) => {
            warn!("Gap year planning failed, using fallback: {e}");
            fallback_gap_year_plan()
        }
    };

    Ok(Json(plan))
}
