// Shared prompt constants and prompt-building utilities.
// Feature modules build their user prompts here so the wording stays in one
// place and the fallback tests can pin against it.

use crate::models::assessment::AssessmentResponse;

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System context for the career-counselor chatbot.
pub const COUNSELOR_SYSTEM: &str = "You are a helpful AI career counselor for WhatNext, \
    an AI-powered career guidance platform for Indian students and parents. You help with:\n\
    1. Career path recommendations\n\
    2. Academic stream selection (MPC, BiPC, Commerce, Arts)\n\
    3. College and entrance exam guidance\n\
    4. Study abroad options\n\
    5. Gap year planning\n\
    6. Skill development advice\n\n\
    Keep responses conversational and encouraging, specific to the Indian education \
    system, under 150 words, and include actionable advice when possible. Suggest the \
    platform's assessment tools when relevant. Common topics: engineering (JEE, BITSAT), \
    medical careers (NEET, AIIMS), commerce (CA, CS, MBA), arts and humanities, and \
    emerging fields (AI, Data Science, Digital Marketing).";

/// Builds the mentor-persona system prompt from a mentor profile.
pub fn mentor_system(name: &str, current_role: &str, expertise: &[&str], bio: &str) -> String {
    format!(
        "You are {name}, a {current_role} with expertise in {}.\n\nBackground: {bio}\n\n\
        Respond as this mentor would, providing practical advice based on your \
        experience, specific examples from your career, and actionable next steps. \
        Keep an encouraging but realistic tone, conversational, under 200 words.",
        expertise.join(", ")
    )
}

/// Prompt for analyzing one open-ended answer.
pub fn analysis_prompt(answer: &str, category: &str) -> String {
    format!(
        "Analyze this {category} response from a student career assessment: \"{answer}\"\n\n\
        Extract:\n\
        1. Key interests/skills/goals mentioned\n\
        2. Sentiment score (-1 to 1)\n\
        3. Confidence level (0 to 1)\n\
        4. Career insights\n\n\
        Return JSON with \"keywords\" (array of strings), \"sentiment\" (number), \
        \"confidence\" (number), and \"insights\" (array of strings)."
    )
}

/// Prompt for generating career recommendations from a student profile.
pub fn recommendations_prompt(student_profile: &serde_json::Value) -> String {
    format!(
        "Generate career recommendations for this student:\n{student_profile}\n\n\
        Include:\n\
        1. Recommended academic streams (MPC, BiPC, Commerce, Arts)\n\
        2. Top 3 career paths with details\n\
        3. Success probability (0-100)\n\
        4. Reasoning\n\n\
        Return JSON with \"recommendedStreams\", \"careerPaths\", \
        \"successProbability\", and \"reasoning\"."
    )
}

/// Prompt for the LLM-enhanced parent/child alignment analysis.
pub fn alignment_prompt(
    student_responses: &[AssessmentResponse],
    parent_responses: &[AssessmentResponse],
) -> String {
    format!(
        "Calculate alignment between student and parent expectations:\n\n\
        Student responses: {}\n\
        Parent responses: {}\n\n\
        Analyze alignment in categories: career goals, academic streams, risk \
        tolerance, timeline expectations.\n\n\
        Return JSON with \"overallAlignment\" (0-100), \"categoryScores\" (object), \
        \"misalignedAreas\" (array), and \"recommendations\" (array).",
        serde_json::to_string(student_responses).unwrap_or_default(),
        serde_json::to_string(parent_responses).unwrap_or_default(),
    )
}

/// Prompt for generating a gap-year plan.
pub fn gap_year_prompt(student_profile: &serde_json::Value) -> String {
    format!(
        "Create a gap year plan for this student:\n{student_profile}\n\n\
        Include:\n\
        1. Recommended activities (courses, internships, volunteering)\n\
        2. Timeline and duration\n\
        3. Expected benefits\n\
        4. Clarity score (how much it will help with career clarity)\n\n\
        Return JSON with \"activities\" (array), \"expectedBenefits\" (array), \
        and \"clarityScore\" (0-100)."
    )
}
