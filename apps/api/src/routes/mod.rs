pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::chat::handlers as chat;
use crate::guidance::handlers as guidance;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/questions",
            get(assessment::handle_questions),
        )
        .route(
            "/api/v1/assessment/process",
            post(assessment::handle_process),
        )
        .route(
            "/api/v1/assessment/results/:id",
            get(assessment::handle_get_results),
        )
        .route(
            "/api/v1/assessment/evaluate",
            post(assessment::handle_evaluate),
        )
        .route(
            "/api/v1/assessment/analyze",
            post(assessment::handle_analyze),
        )
        .route(
            "/api/v1/assessment/parent-alignment",
            post(assessment::handle_parent_alignment),
        )
        .route(
            "/api/v1/alignment/calculate",
            post(assessment::handle_alignment_calculate),
        )
        // Guidance API
        .route(
            "/api/v1/recommendations/generate",
            post(guidance::handle_generate_recommendations),
        )
        .route("/api/v1/gap-year/plan", post(guidance::handle_gap_year_plan))
        // Chat API
        .route("/api/v1/chatbot", post(chat::handle_chatbot))
        .route("/api/v1/mentorship/chat", post(chat::handle_mentor_chat))
        .with_state(state)
}
