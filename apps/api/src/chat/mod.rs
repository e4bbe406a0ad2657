//! Chatbot and mentor-chat surfaces: LLM-enhanced replies with a keyword
//! fallback floor.

pub mod fallback;
pub mod handlers;
