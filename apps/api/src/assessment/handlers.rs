use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::alignment::compute_alignment;
use crate::assessment::engine::{evaluate_assessment, process_assessment};
use crate::assessment::questions::{QuestionDef, QUESTION_CATALOG};
use crate::assessment::store;
use crate::errors::AppError;
use crate::guidance::{fallback_analysis, AnswerAnalysis};
use crate::llm_client::prompts::{alignment_prompt, analysis_prompt, JSON_ONLY_SYSTEM};
use crate::models::assessment::{
    AssessmentReport, AssessmentResponse, AssessmentResultRow, AssessmentResults,
    ParentChildAlignment, ParentExpectations,
};
use crate::state::AppState;

/// GET /api/v1/assessment/questions
pub async fn handle_questions() -> Json<&'static [QuestionDef]> {
    Json(QUESTION_CATALOG)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub user_id: Uuid,
    pub responses: Vec<AssessmentResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub results: AssessmentResults,
}

/// POST /api/v1/assessment/process
///
/// Scores the questionnaire-path submission and persists the result record.
pub async fn handle_process(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>, AppError> {
    if req.responses.is_empty() {
        return Err(AppError::Validation(
            "responses must not be empty".to_string(),
        ));
    }

    let results = process_assessment(&req.responses, state.classifier.as_ref());
    if results.skipped_answers > 0 {
        info!(
            user_id = %req.user_id,
            skipped = results.skipped_answers,
            "Skipped malformed answers during scoring"
        );
    }

    let id = store::insert_results(&state.db, req.user_id, "questionnaire", &results).await?;
    info!(user_id = %req.user_id, result_id = %id, "Stored questionnaire assessment");

    Ok(Json(ProcessResponse { id, results }))
}

/// GET /api/v1/assessment/results/:id
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentResultRow>, AppError> {
    let row = store::fetch_results(&state.db, id).await?;
    Ok(Json(row))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub responses: Vec<AssessmentResponse>,
    /// When present, the report is also persisted for this user.
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// POST /api/v1/assessment/evaluate
///
/// Adaptive scoring path. Persistence is opportunistic: the report is always
/// returned even if the caller sent no user id.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    if req.responses.is_empty() {
        return Err(AppError::Validation(
            "responses must not be empty".to_string(),
        ));
    }

    let report = evaluate_assessment(&req.responses);

    if let Some(user_id) = req.user_id {
        let id = store::insert_report(&state.db, user_id, &report).await?;
        info!(user_id = %user_id, result_id = %id, "Stored adaptive assessment");
    }

    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentAlignmentRequest {
    pub user_id: Uuid,
    pub student_responses: Vec<AssessmentResponse>,
    pub parent_expectations: ParentExpectations,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentAlignmentResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub alignment: ParentChildAlignment,
}

/// POST /api/v1/assessment/parent-alignment
///
/// Scores the student submission, compares it against the parent form, and
/// persists the alignment record with both inputs.
pub async fn handle_parent_alignment(
    State(state): State<AppState>,
    Json(req): Json<ParentAlignmentRequest>,
) -> Result<Json<ParentAlignmentResponse>, AppError> {
    if req.student_responses.is_empty() {
        return Err(AppError::Validation(
            "studentResponses must not be empty".to_string(),
        ));
    }

    let results = process_assessment(&req.student_responses, state.classifier.as_ref());
    let alignment = compute_alignment(&results, &req.parent_expectations);

    let student_responses = serde_json::to_value(&req.student_responses)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize responses: {e}")))?;
    let id = store::insert_alignment(
        &state.db,
        req.user_id,
        &student_responses,
        &req.parent_expectations,
        &alignment,
    )
    .await?;
    info!(user_id = %req.user_id, alignment_id = %id, "Stored parent/child alignment");

    Ok(Json(ParentAlignmentResponse { id, alignment }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentCalculateRequest {
    pub student_responses: Vec<AssessmentResponse>,
    pub parent_responses: Vec<AssessmentResponse>,
}

/// Free-form alignment analysis as the LLM returns it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentAnalysis {
    pub overall_alignment: u8,
    pub category_scores: BTreeMap<String, u8>,
    pub misaligned_areas: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AlignmentAnalysis {
    /// Neutral analysis returned whenever the LLM path is unavailable.
    fn neutral() -> Self {
        Self {
            overall_alignment: 75,
            category_scores: BTreeMap::new(),
            misaligned_areas: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// POST /api/v1/alignment/calculate
///
/// LLM-interpreted alignment between raw student and parent answer sets.
/// Distinct from the deterministic parent-alignment endpoint: this one works
/// on two free-form response lists and is not persisted.
pub async fn handle_alignment_calculate(
    State(state): State<AppState>,
    Json(req): Json<AlignmentCalculateRequest>,
) -> Result<Json<AlignmentAnalysis>, AppError> {
    if req.student_responses.is_empty() || req.parent_responses.is_empty() {
        return Err(AppError::Validation(
            "both studentResponses and parentResponses are required".to_string(),
        ));
    }

    let prompt = alignment_prompt(&req.student_responses, &req.parent_responses);
    let analysis = match state
        .llm
        .call_json::<AlignmentAnalysis>(JSON_ONLY_SYSTEM, &prompt)
        .await
    {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("Alignment analysis failed, using neutral fallback: {e}");
            AlignmentAnalysis::neutral()
        }
    };

    Ok(Json(analysis))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub answer: String,
    pub category: String,
}

/// POST /api/v1/assessment/analyze
///
/// Analyzes one open-ended answer. Falls back to keyword extraction.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnswerAnalysis>, AppError> {
    if req.answer.trim().is_empty() {
        return Err(AppError::Validation("answer must not be empty".to_string()));
    }

    let prompt = analysis_prompt(&req.answer, &req.category);
    let analysis = match state
        .llm
        .call_json::<AnswerAnalysis>(JSON_ONLY_SYSTEM, &prompt)
        .await
    {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("Answer analysis failed, using keyword fallback: {e}");
            fallback_analysis(&req.answer)
        }
    };

    Ok(Json(analysis))
}
