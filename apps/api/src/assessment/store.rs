//! Persistence for scored results and alignment records.
//!
//! The scoring engine itself is pure; these functions are the only place the
//! assessment module touches PostgreSQL. A failed write surfaces as a
//! database error — nothing is retried or rolled back because the
//! computation has no side effects to undo.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{
    AssessmentReport, AssessmentResultRow, AssessmentResults, ParentChildAlignment,
    ParentExpectations,
};

/// Inserts a scored result set and returns the new row id.
pub async fn insert_results(
    db: &PgPool,
    user_id: Uuid,
    assessment_type: &str,
    results: &AssessmentResults,
) -> Result<Uuid, AppError> {
    let payload = serde_json::to_value(results)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize results: {e}")))?;

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO assessment_results (user_id, assessment_type, results)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(assessment_type)
    .bind(payload)
    .fetch_one(db)
    .await?;

    Ok(id)
}

/// Inserts an adaptive-path report and returns the new row id.
pub async fn insert_report(
    db: &PgPool,
    user_id: Uuid,
    report: &AssessmentReport,
) -> Result<Uuid, AppError> {
    let payload = serde_json::to_value(report)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize report: {e}")))?;

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO assessment_results (user_id, assessment_type, results)
        VALUES ($1, 'adaptive', $2)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(payload)
    .fetch_one(db)
    .await?;

    Ok(id)
}

pub async fn fetch_results(db: &PgPool, id: Uuid) -> Result<AssessmentResultRow, AppError> {
    let row: Option<AssessmentResultRow> = sqlx::query_as(
        "SELECT id, user_id, assessment_type, results, created_at
         FROM assessment_results WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    row.ok_or_else(|| AppError::NotFound(format!("Assessment result {id} not found")))
}

/// Inserts a parent/child alignment record alongside the inputs it was
/// computed from, returning the new row id.
pub async fn insert_alignment(
    db: &PgPool,
    user_id: Uuid,
    student_responses: &serde_json::Value,
    expectations: &ParentExpectations,
    alignment: &ParentChildAlignment,
) -> Result<Uuid, AppError> {
    let expectations = serde_json::to_value(expectations)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize expectations: {e}")))?;
    let alignment = serde_json::to_value(alignment)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize alignment: {e}")))?;

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO parent_child_alignments
            (user_id, student_responses, parent_expectations, alignment)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(student_responses)
    .bind(expectations)
    .bind(alignment)
    .fetch_one(db)
    .await?;

    Ok(id)
}
