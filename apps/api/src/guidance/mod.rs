//! Best-effort guidance generators: career recommendations, gap-year plans
//! and open-ended answer analysis. Each has an LLM path and a fixed
//! deterministic fallback.

pub mod handlers;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub required_stream: String,
    pub entrance_exams: Vec<String>,
    pub degree_options: Vec<String>,
    pub skills_required: Vec<String>,
    pub average_salary: String,
    pub job_prospects: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub recommended_streams: Vec<String>,
    pub career_paths: Vec<CareerPath>,
    pub success_probability: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapYearPlan {
    pub activities: Vec<String>,
    pub expected_benefits: Vec<String>,
    pub clarity_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerAnalysis {
    pub keywords: Vec<String>,
    pub sentiment: f64,
    pub confidence: f64,
    pub insights: Vec<String>,
}

/// Fallback recommendations when the LLM path is unavailable.
pub fn fallback_recommendations() -> Recommendations {
    Recommendations {
        recommended_streams: vec!["MPC".to_string(), "BiPC".to_string()],
        career_paths: vec![
            CareerPath {
                title: "Software Engineer".to_string(),
                description: "Design and develop software applications".to_string(),
                required_stream: "MPC".to_string(),
                entrance_exams: vec!["JEE Main".to_string(), "JEE Advanced".to_string()],
                degree_options: vec!["B.Tech Computer Science".to_string()],
                skills_required: vec![
                    "Programming".to_string(),
                    "Problem Solving".to_string(),
                    "Mathematics".to_string(),
                ],
                average_salary: "₹8-15 LPA".to_string(),
                job_prospects: "Excellent growth opportunities in tech industry".to_string(),
            },
            CareerPath {
                title: "Doctor".to_string(),
                description: "Provide medical care and treatment".to_string(),
                required_stream: "BiPC".to_string(),
                entrance_exams: vec!["NEET".to_string()],
                degree_options: vec!["MBBS".to_string()],
                skills_required: vec![
                    "Biology".to_string(),
                    "Chemistry".to_string(),
                    "Empathy".to_string(),
                    "Communication".to_string(),
                ],
                average_salary: "₹10-25 LPA".to_string(),
                job_prospects: "High demand with stable career prospects".to_string(),
            },
        ],
        success_probability: 85,
        reasoning: "Based on your interests and aptitude, these paths align well with your profile."
            .to_string(),
    }
}

/// Fallback gap-year plan when the LLM path is unavailable.
pub fn fallback_gap_year_plan() -> GapYearPlan {
    GapYearPlan {
        activities: vec![
            "Take an online course in a field you are curious about".to_string(),
            "Intern with a local business or NGO".to_string(),
            "Volunteer for a community project".to_string(),
        ],
        expected_benefits: vec![
            "Clearer sense of direction before committing to a degree".to_string(),
            "Practical experience to test your interests".to_string(),
        ],
        clarity_score: 70,
    }
}

/// Keyword-extraction fallback for open-ended answer analysis: the first few
/// words longer than three characters, with fixed neutral-positive scores.
pub fn fallback_analysis(answer: &str) -> AnswerAnalysis {
    let keywords = answer
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .take(5)
        .map(|word| word.to_string())
        .collect();

    AnswerAnalysis {
        keywords,
        sentiment: 0.7,
        confidence: 0.8,
        insights: vec![
            "Shows clear interest in the field".to_string(),
            "Demonstrates good communication skills".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_recommendations_shape() {
        let recs = fallback_recommendations();
        assert_eq!(recs.recommended_streams, vec!["MPC", "BiPC"]);
        assert_eq!(recs.career_paths.len(), 2);
        assert!(recs.success_probability <= 100);
    }

    #[test]
    fn test_fallback_analysis_extracts_keywords() {
        let analysis = fallback_analysis("I am deeply interested in robotics and automation");
        assert_eq!(analysis.keywords.len(), 5);
        assert!(analysis.keywords.contains(&"robotics".to_string()));
        assert!(!analysis.keywords.contains(&"am".to_string()));
    }

    #[test]
    fn test_fallback_analysis_handles_short_answers() {
        let analysis = fallback_analysis("ok");
        assert!(analysis.keywords.is_empty());
        assert!(!analysis.insights.is_empty());
    }
}
