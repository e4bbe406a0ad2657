//! Turns trait thresholds into human-readable strengths, weaknesses and
//! recommendations. Pure threshold mapping; a trait of 5 or 6 produces
//! neither a strength nor a weakness.

use crate::models::assessment::{AnswerValue, AssessmentResponse, PersonalityTraits, StrengthsWeaknesses};

const STRENGTH_THRESHOLD: u8 = 7;
const WEAKNESS_THRESHOLD: u8 = 4;

/// Narrates the four-trait vector. Never returns an empty strengths or
/// weaknesses list: when no rule fires, fixed defaults fill the gap.
pub fn narrate(traits: &PersonalityTraits) -> StrengthsWeaknesses {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut recommendations = Vec::new();

    if traits.analytical >= STRENGTH_THRESHOLD {
        strengths.push("Strong analytical and problem-solving skills".to_string());
        recommendations.push("Consider careers in data analysis, research, or engineering".to_string());
    } else if traits.analytical <= WEAKNESS_THRESHOLD {
        weaknesses.push("Could benefit from developing analytical thinking skills".to_string());
        recommendations.push("Practice logical reasoning and problem-solving exercises".to_string());
    }

    if traits.creative >= STRENGTH_THRESHOLD {
        strengths.push("High creativity and innovative thinking".to_string());
        recommendations.push("Explore creative fields like design, writing, or arts".to_string());
    } else if traits.creative <= WEAKNESS_THRESHOLD {
        weaknesses.push("May need to develop creative thinking abilities".to_string());
        recommendations.push("Engage in creative activities and brainstorming exercises".to_string());
    }

    if traits.leadership >= STRENGTH_THRESHOLD {
        strengths.push("Natural leadership and team management abilities".to_string());
        recommendations.push("Consider leadership roles and management positions".to_string());
    } else if traits.leadership <= WEAKNESS_THRESHOLD {
        weaknesses.push("Could improve leadership and communication skills".to_string());
        recommendations
            .push("Join clubs, volunteer for group projects, practice public speaking".to_string());
    }

    // The two general recommendations always apply.
    recommendations.push("Build a strong portfolio of projects in your area of interest".to_string());
    recommendations.push("Seek internships and practical experience in your chosen field".to_string());

    if strengths.is_empty() {
        strengths.push("Balanced skill set across analytical and creative thinking".to_string());
        strengths.push("Adaptability across different kinds of work".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("No significant skill gaps identified from this assessment".to_string());
    }

    StrengthsWeaknesses {
        strengths,
        weaknesses,
        recommendations,
    }
}

fn rating_for(responses: &[AssessmentResponse], question_id: &str) -> Option<f64> {
    responses
        .iter()
        .find(|r| r.question_id == question_id)
        .and_then(|r| match &r.answer {
            AnswerValue::Rating(value) => Some(*value),
            _ => None,
        })
}

/// Adaptive-path narration over individual rating answers.
/// Strengths cap at 5 entries, improvements at 3; defaults fill empty sides.
pub fn strengths_and_improvements(responses: &[AssessmentResponse]) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    let checks: [(&str, &str, &str); 3] = [
        ("personality_1", "Team collaboration", "Teamwork skills"),
        ("academics_2", "Numerical aptitude", "Mathematical skills"),
        ("personality_4", "Leadership potential", "Leadership skills"),
    ];

    for (question_id, strength, improvement) in checks {
        if let Some(score) = rating_for(responses, question_id) {
            if score >= 7.0 {
                strengths.push(strength.to_string());
            } else if score <= 4.0 {
                improvements.push(improvement.to_string());
            }
        }
    }

    if strengths.is_empty() {
        strengths.extend(
            ["Analytical thinking", "Problem solving", "Adaptability"]
                .iter()
                .map(|s| s.to_string()),
        );
    }
    if improvements.is_empty() {
        improvements.extend(
            ["Communication skills", "Time management", "Technical skills"]
                .iter()
                .map(|s| s.to_string()),
        );
    }

    strengths.truncate(5);
    improvements.truncate(3);
    (strengths, improvements)
}

/// Confidence in an adaptive-path report, in [60, 95].
///
/// Starts at 70, rewards completeness, and nudges for rating consistency
/// (low variance up, high variance down).
pub fn confidence_score(responses: &[AssessmentResponse]) -> u8 {
    let mut confidence = 70.0f64;

    if !responses.is_empty() {
        let complete = responses
            .iter()
            .filter(|r| match &r.answer {
                AnswerValue::Multi(values) => !values.is_empty(),
                AnswerValue::Single(text) => !text.trim().is_empty(),
                AnswerValue::Rating(_) => true,
            })
            .count();
        confidence += complete as f64 / responses.len() as f64 * 20.0;
    }

    let ratings: Vec<f64> = responses
        .iter()
        .filter_map(|r| match &r.answer {
            AnswerValue::Rating(value) => Some(*value),
            _ => None,
        })
        .collect();

    if !ratings.is_empty() {
        let variance = variance(&ratings);
        if variance < 2.0 {
            confidence += 10.0;
        } else if variance > 6.0 {
            confidence -= 5.0;
        }
    }

    confidence.round().clamp(60.0, 95.0) as u8
}

fn variance(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(analytical: u8, creative: u8, leadership: u8) -> PersonalityTraits {
        PersonalityTraits {
            analytical,
            creative,
            leadership,
            risk_tolerance: 5,
        }
    }

    fn rating(question_id: &str, value: f64) -> AssessmentResponse {
        AssessmentResponse {
            question_id: question_id.to_string(),
            answer: AnswerValue::Rating(value),
            category: "personality".to_string(),
            weight: 1.0,
        }
    }

    #[test]
    fn test_high_traits_become_strengths() {
        let report = narrate(&traits(8, 7, 9));
        assert_eq!(report.strengths.len(), 3);
        assert!(report.strengths[0].contains("analytical"));
        // Fallback weakness still fills the empty side.
        assert!(!report.weaknesses.is_empty());
    }

    #[test]
    fn test_low_traits_become_weaknesses() {
        let report = narrate(&traits(3, 4, 2));
        assert_eq!(report.weaknesses.len(), 3);
        assert!(!report.strengths.is_empty(), "fallback strengths must apply");
    }

    #[test]
    fn test_mid_band_traits_trigger_neither() {
        let report = narrate(&traits(5, 6, 5));
        // Only the fallback entries and the two general recommendations.
        assert_eq!(report.recommendations.len(), 2);
        assert!(!report.strengths.is_empty());
        assert!(!report.weaknesses.is_empty());
    }

    #[test]
    fn test_general_recommendations_always_present() {
        for t in [traits(9, 9, 9), traits(1, 1, 1), traits(5, 5, 5)] {
            let report = narrate(&t);
            assert!(report
                .recommendations
                .iter()
                .any(|r| r.contains("portfolio")));
            assert!(report
                .recommendations
                .iter()
                .any(|r| r.contains("internships")));
        }
    }

    #[test]
    fn test_strengths_and_improvements_thresholds() {
        let (strengths, improvements) = strengths_and_improvements(&[
            rating("personality_1", 8.0),
            rating("academics_2", 3.0),
            rating("personality_4", 5.0),
        ]);
        assert_eq!(strengths, vec!["Team collaboration"]);
        assert_eq!(improvements, vec!["Mathematical skills"]);
    }

    #[test]
    fn test_strengths_and_improvements_defaults_when_nothing_fires() {
        let (strengths, improvements) = strengths_and_improvements(&[]);
        assert_eq!(strengths.len(), 3);
        assert_eq!(improvements.len(), 3);
        assert!(strengths.contains(&"Adaptability".to_string()));
    }

    #[test]
    fn test_confidence_base_for_empty_responses() {
        assert_eq!(confidence_score(&[]), 70);
    }

    #[test]
    fn test_confidence_rewards_complete_consistent_answers() {
        // All complete (+20) and identical ratings (variance 0, +10).
        let responses = vec![rating("personality_1", 7.0), rating("personality_4", 7.0)];
        assert_eq!(confidence_score(&responses), 95);
    }

    #[test]
    fn test_confidence_penalizes_high_variance() {
        // Complete (+20), but wildly inconsistent ratings (-5).
        let responses = vec![
            rating("personality_1", 1.0),
            rating("personality_3", 10.0),
            rating("personality_4", 1.0),
        ];
        assert_eq!(confidence_score(&responses), 85);
    }

    #[test]
    fn test_confidence_always_in_band() {
        let sparse = vec![AssessmentResponse {
            question_id: "interests_1".to_string(),
            answer: AnswerValue::Multi(vec![]),
            category: "interests".to_string(),
            weight: 1.0,
        }];
        let c = confidence_score(&sparse);
        assert!((60..=95).contains(&c));
    }
}
