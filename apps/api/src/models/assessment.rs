use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One answer value with an explicit discriminant.
///
/// The wire format is `{"kind": "multi", "value": ["Mathematics"]}` and so on.
/// Scoring dispatches exhaustively on the variant; a shape that does not match
/// what a question expects is skipped (and counted), never coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
    Rating(f64),
}

fn default_weight() -> f64 {
    1.0
}

/// One respondent's reply to one question. Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub question_id: String,
    pub answer: AnswerValue,
    pub category: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// Interest accumulator over the six fixed domains.
///
/// Every field is always present and non-negative; a domain no answer touched
/// stays at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestScores {
    pub science: f64,
    pub technology: f64,
    pub arts: f64,
    pub business: f64,
    pub social: f64,
    pub practical: f64,
}

impl InterestScores {
    /// Looks up a domain by its match-factor name.
    pub fn get(&self, factor: &str) -> Option<f64> {
        match factor {
            "science" => Some(self.science),
            "technology" => Some(self.technology),
            "arts" => Some(self.arts),
            "business" => Some(self.business),
            "social" => Some(self.social),
            "practical" => Some(self.practical),
            _ => None,
        }
    }
}

/// Four-trait personality vector used by the questionnaire scoring path.
/// Values are integers in [1, 10]; 5 is the neutral seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTraits {
    pub analytical: u8,
    pub creative: u8,
    pub leadership: u8,
    pub risk_tolerance: u8,
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            analytical: 5,
            creative: 5,
            leadership: 5,
            risk_tolerance: 5,
        }
    }
}

impl PersonalityTraits {
    pub fn get(&self, factor: &str) -> Option<f64> {
        match factor {
            "analytical" => Some(f64::from(self.analytical)),
            "creative" => Some(f64::from(self.creative)),
            "leadership" => Some(f64::from(self.leadership)),
            "riskTolerance" => Some(f64::from(self.risk_tolerance)),
            _ => None,
        }
    }
}

/// Big Five vector used by the adaptive scoring path. Same [1, 10] scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFiveTraits {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl Default for BigFiveTraits {
    fn default() -> Self {
        Self {
            openness: 5,
            conscientiousness: 5,
            extraversion: 5,
            agreeableness: 5,
            neuroticism: 5,
        }
    }
}

impl BigFiveTraits {
    /// Sum of absolute per-trait differences (L1 distance).
    pub fn l1_distance(&self, other: &BigFiveTraits) -> u32 {
        let d = |a: u8, b: u8| u32::from(a.abs_diff(b));
        d(self.openness, other.openness)
            + d(self.conscientiousness, other.conscientiousness)
            + d(self.extraversion, other.extraversion)
            + d(self.agreeableness, other.agreeableness)
            + d(self.neuroticism, other.neuroticism)
    }
}

/// A career from the questionnaire-path catalog, annotated with its computed
/// match percentage. Derived per scoring run, never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub title: String,
    pub description: String,
    pub match_percentage: u8,
    pub average_salary: String,
    pub job_growth: String,
    pub required_stream: String,
    pub skills_required: Vec<String>,
}

/// A career from the adaptive-path catalog with its computed match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCareer {
    pub title: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_percentage: u8,
    pub salary_range: String,
    pub growth_potential: String,
    pub education_path: String,
    pub skills: Vec<String>,
}

/// One stream with its suitability and success outlook (adaptive path).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecommendation {
    pub stream: String,
    pub suitability: u8,
    pub careers: Vec<String>,
    pub success_probability: u8,
}

/// Personality profile produced by the questionnaire path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    #[serde(rename = "type")]
    pub archetype: String,
    pub traits: PersonalityTraits,
    pub work_style: String,
    pub learning_style: String,
}

/// Personality profile produced by the adaptive path (Big Five + archetype).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigFiveProfile {
    #[serde(rename = "type")]
    pub archetype: String,
    pub traits: BigFiveTraits,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthsWeaknesses {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Full result record of the questionnaire scoring path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub recommended_stream: String,
    pub success_probability: u8,
    pub career_matches: Vec<CareerMatch>,
    pub personality_profile: PersonalityProfile,
    pub strengths_weaknesses: StrengthsWeaknesses,
    pub parent_child_alignment: Option<ParentChildAlignment>,
    /// Diagnostic only: answers whose shape did not match their question.
    pub skipped_answers: usize,
}

/// Full result record of the adaptive scoring path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub personality_profile: BigFiveProfile,
    pub career_matches: Vec<RankedCareer>,
    pub stream_recommendations: Vec<StreamRecommendation>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub confidence: u8,
}

/// What a parent expects for their child, collected by the parent form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentExpectations {
    pub preferred_streams: Vec<String>,
    pub career_priorities: Vec<String>,
    pub risk_tolerance: f64,
    pub timeline_expectations: String,
    pub support_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentChildAlignment {
    pub overall_score: u8,
    pub category_scores: BTreeMap<String, u8>,
    pub misaligned_areas: Vec<String>,
}

/// Persisted assessment result. The scored payload is stored as JSONB since
/// the result record is read back whole, never queried by inner field.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResultRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_type: String,
    pub results: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_responses: serde_json::Value,
    pub parent_expectations: serde_json::Value,
    pub alignment: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_value_wire_format_is_tagged() {
        let multi = AnswerValue::Multi(vec!["Mathematics".to_string()]);
        let json = serde_json::to_value(&multi).unwrap();
        assert_eq!(json["kind"], "multi");
        assert_eq!(json["value"][0], "Mathematics");

        let rating: AnswerValue =
            serde_json::from_str(r#"{"kind":"rating","value":7.0}"#).unwrap();
        assert_eq!(rating, AnswerValue::Rating(7.0));
    }

    #[test]
    fn test_response_weight_defaults_to_one() {
        let resp: AssessmentResponse = serde_json::from_str(
            r#"{"questionId":"interests-1","answer":{"kind":"multi","value":[]},"category":"interests"}"#,
        )
        .unwrap();
        assert_eq!(resp.weight, 1.0);
    }

    #[test]
    fn test_interest_lookup_covers_all_six_domains() {
        let scores = InterestScores::default();
        for factor in ["science", "technology", "arts", "business", "social", "practical"] {
            assert!(scores.get(factor).is_some(), "missing domain {factor}");
        }
        assert!(scores.get("athletics").is_none());
    }

    #[test]
    fn test_trait_lookup_uses_camel_case_factor_name() {
        let traits = PersonalityTraits {
            risk_tolerance: 8,
            ..PersonalityTraits::default()
        };
        assert_eq!(traits.get("riskTolerance"), Some(8.0));
        assert!(traits.get("risk_tolerance").is_none());
    }

    #[test]
    fn test_l1_distance_symmetric() {
        let a = BigFiveTraits::default();
        let b = BigFiveTraits {
            openness: 9,
            neuroticism: 2,
            ..BigFiveTraits::default()
        };
        assert_eq!(a.l1_distance(&b), 7);
        assert_eq!(b.l1_distance(&a), 7);
    }
}
