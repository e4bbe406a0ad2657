use axum::{extract::State, Json};
use chrono::Utc;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chat::fallback;
use crate::errors::AppError;
use crate::llm_client::prompts::{mentor_system, COUNSELOR_SYSTEM};
use crate::llm_client::ChatMessage;
use crate::state::AppState;

/// One prior turn of a conversation as the client stores it.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextMessage {
    pub sender: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    pub message: String,
    #[serde(default)]
    pub context: Vec<ContextMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    pub response: String,
    pub suggestions: Vec<String>,
}

fn history(context: &[ContextMessage]) -> Vec<ChatMessage> {
    context
        .iter()
        .map(|msg| {
            if msg.sender == "user" {
                ChatMessage::user(msg.content.clone())
            } else {
                ChatMessage::assistant(msg.content.clone())
            }
        })
        .collect()
}

/// POST /api/v1/chatbot
///
/// LLM-backed when a key is configured; any LLM failure falls back to the
/// keyword responder. This endpoint never fails on LLM trouble.
pub async fn handle_chatbot(
    State(state): State<AppState>,
    Json(req): Json<ChatbotRequest>,
) -> Result<Json<ChatbotResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let mut messages = vec![ChatMessage::system(COUNSELOR_SYSTEM)];
    messages.extend(history(&req.context));
    messages.push(ChatMessage::user(req.message.clone()));

    let response = match state.llm.call(&messages).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Chatbot LLM call failed, using keyword fallback: {e}");
            fallback::keyword_response(&req.message, &mut thread_rng()).to_string()
        }
    };

    let suggestions = fallback::pick_suggestions(&mut thread_rng(), 3);
    Ok(Json(ChatbotResponse {
        response,
        suggestions,
    }))
}

/// The one mentor persona currently offered.
struct MentorProfile {
    name: &'static str,
    current_role: &'static str,
    expertise: &'static [&'static str],
    bio: &'static str,
}

const MENTOR: MentorProfile = MentorProfile {
    name: "Dr. Sarah Chen",
    current_role: "Senior Software Engineer at Google",
    expertise: &["Computer Science", "AI/ML", "Career Development"],
    bio: "PhD in Computer Science with 10+ years in tech industry. \
          Passionate about mentoring students in STEM careers.",
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorChatRequest {
    pub mentor_id: String,
    pub message: String,
    #[serde(default)]
    pub context: Vec<ContextMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorChatResponse {
    pub response: String,
    pub mentor_id: String,
    pub timestamp: chrono::DateTime<Utc>,
}

/// POST /api/v1/mentorship/chat
pub async fn handle_mentor_chat(
    State(state): State<AppState>,
    Json(req): Json<MentorChatRequest>,
) -> Result<Json<MentorChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let system = mentor_system(MENTOR.name, MENTOR.current_role, MENTOR.expertise, MENTOR.bio);
    let mut messages = vec![ChatMessage::system(system)];
    messages.extend(history(&req.context));
    messages.push(ChatMessage::user(req.message.clone()));

    let response = match state.llm.call(&messages).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Mentor LLM call failed, using canned response: {e}");
            fallback::mentor_response(&req.message).to_string()
        }
    };

    Ok(Json(MentorChatResponse {
        response,
        mentor_id: req.mentor_id,
        timestamp: Utc::now(),
    }))
}
