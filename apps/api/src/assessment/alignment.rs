//! Parent/child alignment between a student's scored results and the
//! expectations collected from the parent form.
//!
//! Three category scores feed a rounded mean: stream choice, risk tolerance
//! distance, and career-priority overlap. Anything under the misalignment
//! threshold is listed by name so the UI can open that conversation.

use std::collections::BTreeMap;

use crate::models::assessment::{AssessmentResults, ParentChildAlignment, ParentExpectations};

const STREAM_CATEGORY: &str = "Stream choice";
const RISK_CATEGORY: &str = "Risk tolerance";
const CAREER_CATEGORY: &str = "Career priorities";

const MISALIGNMENT_THRESHOLD: u8 = 60;
const STREAM_MATCH_SCORE: u8 = 100;
const STREAM_MISMATCH_SCORE: u8 = 40;
const NEUTRAL_SCORE: u8 = 70;

/// How many of the student's top career matches the priority overlap checks.
const TOP_MATCHES_CONSIDERED: usize = 5;

pub fn compute_alignment(
    results: &AssessmentResults,
    expectations: &ParentExpectations,
) -> ParentChildAlignment {
    let stream_score = score_stream(results, expectations);
    let risk_score = score_risk(results, expectations);
    let career_score = score_careers(results, expectations);

    let mut category_scores = BTreeMap::new();
    category_scores.insert(STREAM_CATEGORY.to_string(), stream_score);
    category_scores.insert(RISK_CATEGORY.to_string(), risk_score);
    category_scores.insert(CAREER_CATEGORY.to_string(), career_score);

    let overall = (f64::from(stream_score) + f64::from(risk_score) + f64::from(career_score)) / 3.0;

    let misaligned_areas = category_scores
        .iter()
        .filter(|(_, score)| **score < MISALIGNMENT_THRESHOLD)
        .map(|(category, _)| category.clone())
        .collect();

    ParentChildAlignment {
        overall_score: overall.round() as u8,
        category_scores,
        misaligned_areas,
    }
}

fn score_stream(results: &AssessmentResults, expectations: &ParentExpectations) -> u8 {
    if expectations.preferred_streams.is_empty() {
        return NEUTRAL_SCORE;
    }
    let recommended = results.recommended_stream.to_lowercase();
    let matched = expectations
        .preferred_streams
        .iter()
        .any(|preferred| preferred.to_lowercase().contains(&recommended));
    if matched {
        STREAM_MATCH_SCORE
    } else {
        STREAM_MISMATCH_SCORE
    }
}

/// 100 minus 10 per point of distance on the shared 1-10 scale.
fn score_risk(results: &AssessmentResults, expectations: &ParentExpectations) -> u8 {
    let student = f64::from(results.personality_profile.traits.risk_tolerance);
    let parent = expectations.risk_tolerance.clamp(1.0, 10.0);
    let distance = (student - parent).abs();
    (100.0 - distance * 10.0).max(0.0).round() as u8
}

fn score_careers(results: &AssessmentResults, expectations: &ParentExpectations) -> u8 {
    if expectations.career_priorities.is_empty() {
        return NEUTRAL_SCORE;
    }
    let top_titles: Vec<String> = results
        .career_matches
        .iter()
        .take(TOP_MATCHES_CONSIDERED)
        .map(|c| c.title.to_lowercase())
        .collect();

    let matched = expectations
        .career_priorities
        .iter()
        .filter(|priority| {
            let priority = priority.to_lowercase();
            top_titles
                .iter()
                .any(|title| title.contains(&priority) || priority.contains(title))
        })
        .count();

    let ratio = matched as f64 / expectations.career_priorities.len() as f64;
    (ratio * 100.0).round() as u8
}
