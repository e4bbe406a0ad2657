//! Folds raw questionnaire answers into the interest and trait vectors.
//!
//! All accumulation is commutative, so answer order never changes a result.
//! Rounding and clamping happen exactly once, after the fold. An answer whose
//! shape does not match what its question expects contributes nothing; the
//! skip count is returned so callers can surface it as a diagnostic.

use crate::models::assessment::{
    AnswerValue, AssessmentResponse, BigFiveTraits, InterestScores, PersonalityTraits,
};

/// Question ids the interest fold understands.
const INTERESTS_QUESTION: &str = "interests-1";
const ACADEMICS_QUESTION: &str = "academics-1";

/// Builds the six-domain interest vector from multi-select answers.
/// Returns the vector together with the number of skipped answers.
pub fn aggregate_interests(responses: &[AssessmentResponse]) -> (InterestScores, usize) {
    let mut scores = InterestScores::default();
    let mut skipped = 0usize;

    for response in responses {
        match response.question_id.as_str() {
            INTERESTS_QUESTION => match &response.answer {
                AnswerValue::Multi(options) => {
                    for option in options {
                        apply_interest_option(&mut scores, option);
                    }
                }
                _ => skipped += 1,
            },
            ACADEMICS_QUESTION => match &response.answer {
                AnswerValue::Multi(subjects) => {
                    for subject in subjects {
                        apply_subject(&mut scores, subject);
                    }
                }
                _ => skipped += 1,
            },
            _ => {}
        }
    }

    (scores, skipped)
}

fn apply_interest_option(scores: &mut InterestScores, option: &str) {
    match option {
        "Reading books and articles" | "Solving puzzles or brain teasers" => {
            scores.science += 2.0;
        }
        "Building or fixing things" => {
            scores.technology += 2.0;
            scores.practical += 2.0;
        }
        "Creating art, music, or writing" => {
            scores.arts += 3.0;
        }
        "Socializing with friends" => {
            scores.social += 2.0;
        }
        "Playing video games" => {
            scores.technology += 1.0;
        }
        _ => {}
    }
}

fn apply_subject(scores: &mut InterestScores, subject: &str) {
    match subject {
        "Mathematics" | "Physics" | "Chemistry" => {
            scores.science += 3.0;
        }
        "Biology" => {
            scores.science += 2.0;
        }
        "Computer Science" => {
            scores.technology += 3.0;
        }
        "English Literature" | "Art" | "Music" => {
            scores.arts += 3.0;
        }
        "Economics" => {
            scores.business += 2.0;
        }
        "Psychology" | "History" => {
            scores.social += 2.0;
        }
        _ => {}
    }
}

/// Rating sensitivities for the four-trait questionnaire path.
/// Each trait starts at the neutral 5 and shifts by (rating - 5) * sensitivity.
const ANALYTICAL_SENSITIVITY: f64 = 0.5;
const LEADERSHIP_SENSITIVITY: f64 = 0.6;
const RISK_SENSITIVITY: f64 = 0.6;

/// Builds the four-trait personality vector from rating answers.
pub fn aggregate_traits(responses: &[AssessmentResponse]) -> (PersonalityTraits, usize) {
    let mut analytical = 5.0f64;
    let mut leadership = 5.0f64;
    let mut risk_tolerance = 5.0f64;
    let creative = 5.0f64;
    let mut skipped = 0usize;

    for response in responses {
        let target = match response.question_id.as_str() {
            "personality-1" => (&mut analytical, ANALYTICAL_SENSITIVITY),
            "personality-2" => (&mut leadership, LEADERSHIP_SENSITIVITY),
            "risk-tolerance-1" => (&mut risk_tolerance, RISK_SENSITIVITY),
            _ => continue,
        };
        match &response.answer {
            AnswerValue::Rating(r) => *target.0 += (r - 5.0) * target.1,
            _ => skipped += 1,
        }
    }

    let traits = PersonalityTraits {
        analytical: finish_trait(analytical),
        creative: finish_trait(creative),
        leadership: finish_trait(leadership),
        risk_tolerance: finish_trait(risk_tolerance),
    };
    (traits, skipped)
}

/// Builds the Big Five vector used by the adaptive path.
pub fn aggregate_big_five(responses: &[AssessmentResponse]) -> (BigFiveTraits, usize) {
    let mut openness = 5.0f64;
    let mut conscientiousness = 5.0f64;
    let mut extraversion = 5.0f64;
    let mut agreeableness = 5.0f64;
    let mut neuroticism = 5.0f64;
    let mut skipped = 0usize;

    for response in responses {
        match response.question_id.as_str() {
            // Team collaboration affects extraversion and agreeableness
            "personality_1" => match &response.answer {
                AnswerValue::Rating(r) => {
                    extraversion += (r - 5.0) * 0.3;
                    agreeableness += (r - 5.0) * 0.2;
                }
                _ => skipped += 1,
            },
            // Challenge approach affects conscientiousness and openness
            "personality_2" => match &response.answer {
                AnswerValue::Single(approach) => {
                    if approach.contains("Plan carefully") {
                        conscientiousness += 1.0;
                    } else if approach.contains("Jump in") {
                        openness += 1.0;
                        neuroticism += 0.5;
                    }
                }
                _ => skipped += 1,
            },
            // Risk tolerance affects openness and neuroticism
            "personality_3" => match &response.answer {
                AnswerValue::Rating(r) => {
                    openness += (r - 5.0) * 0.2;
                    neuroticism -= (r - 5.0) * 0.2;
                }
                _ => skipped += 1,
            },
            // Leadership affects extraversion and conscientiousness
            "personality_4" => match &response.answer {
                AnswerValue::Rating(r) => {
                    extraversion += (r - 5.0) * 0.3;
                    conscientiousness += (r - 5.0) * 0.1;
                }
                _ => skipped += 1,
            },
            _ => {}
        }
    }

    let traits = BigFiveTraits {
        openness: finish_trait(openness),
        conscientiousness: finish_trait(conscientiousness),
        extraversion: finish_trait(extraversion),
        agreeableness: finish_trait(agreeableness),
        neuroticism: finish_trait(neuroticism),
    };
    (traits, skipped)
}

/// Single rounding + clamping step applied after the whole fold.
fn finish_trait(value: f64) -> u8 {
    value.round().clamp(1.0, 10.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(question_id: &str, options: &[&str]) -> AssessmentResponse {
        AssessmentResponse {
            question_id: question_id.to_string(),
            answer: AnswerValue::Multi(options.iter().map(|s| s.to_string()).collect()),
            category: "academics".to_string(),
            weight: 1.0,
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
    fn test_empty_responses_yield_zero_interests_and_neutral_traits() {
        let (scores, skipped) = aggregate_interests(&[]);
        assert_eq!(scores, InterestScores::default());
        assert_eq!(skipped, 0);

        let (traits, _) = aggregate_traits(&[]);
        assert_eq!(traits, PersonalityTraits::default());

        let (big_five, _) = aggregate_big_five(&[]);
        assert_eq!(big_five, BigFiveTraits::default());
    }

    #[test]
    fn test_computer_science_adds_three_to_technology_only() {
        let (scores, skipped) = aggregate_interests(&[multi("academics-1", &["Computer Science"])]);
        assert_eq!(scores.technology, 3.0);
        assert_eq!(scores.science, 0.0);
        assert_eq!(scores.arts, 0.0);
        assert_eq!(scores.business, 0.0);
        assert_eq!(scores.social, 0.0);
        assert_eq!(scores.practical, 0.0);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_building_things_feeds_two_domains() {
        let (scores, _) = aggregate_interests(&[multi("interests-1", &["Building or fixing things"])]);
        assert_eq!(scores.technology, 2.0);
        assert_eq!(scores.practical, 2.0);
    }

    #[test]
    fn test_unknown_options_contribute_nothing() {
        let (scores, skipped) =
            aggregate_interests(&[multi("academics-1", &["Astrology", "Mathematics"])]);
        assert_eq!(scores.science, 3.0);
        assert_eq!(skipped, 0, "unknown option strings are not malformed answers");
    }

    #[test]
    fn test_wrong_shape_is_skipped_and_counted() {
        let (scores, skipped) = aggregate_interests(&[rating("academics-1", 8.0)]);
        assert_eq!(scores, InterestScores::default());
        assert_eq!(skipped, 1);

        let (traits, skipped) = aggregate_traits(&[multi("personality-1", &["yes"])]);
        assert_eq!(traits, PersonalityTraits::default());
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_answer_order_does_not_matter() {
        let a = multi("academics-1", &["Mathematics", "Physics"]);
        let b = multi("interests-1", &["Creating art, music, or writing"]);
        let c = rating("personality-1", 9.0);
        let d = rating("risk-tolerance-1", 2.0);

        let forward = [a.clone(), b.clone(), c.clone(), d.clone()];
        let reverse = [d, c, b, a];

        assert_eq!(aggregate_interests(&forward), aggregate_interests(&reverse));
        assert_eq!(aggregate_traits(&forward), aggregate_traits(&reverse));
    }

    #[test]
    fn test_trait_clamped_to_scale_after_fold() {
        // 5 + (10-5)*0.5 = 7.5, rounds to 8
        let (traits, _) = aggregate_traits(&[rating("personality-1", 10.0)]);
        assert_eq!(traits.analytical, 8);

        // Repeated minimum ratings push below 1 before the final clamp.
        let low = vec![rating("risk-tolerance-1", 1.0); 3];
        let (traits, _) = aggregate_traits(&low);
        assert_eq!(traits.risk_tolerance, 1);
    }

    #[test]
    fn test_traits_always_within_scale() {
        for r in 1..=10 {
            let (traits, _) = aggregate_traits(&[
                rating("personality-1", f64::from(r)),
                rating("personality-2", f64::from(r)),
                rating("risk-tolerance-1", f64::from(r)),
            ]);
            for value in [
                traits.analytical,
                traits.creative,
                traits.leadership,
                traits.risk_tolerance,
            ] {
                assert!((1..=10).contains(&value), "trait {value} out of scale");
            }
        }
    }

    #[test]
    fn test_big_five_plan_carefully_raises_conscientiousness() {
        let plan = AssessmentResponse {
            question_id: "personality_2".to_string(),
            answer: AnswerValue::Single("Plan carefully before starting".to_string()),
            category: "personality".to_string(),
            weight: 1.0,
        };
        let (traits, _) = aggregate_big_five(&[plan]);
        assert_eq!(traits.conscientiousness, 6);
        assert_eq!(traits.openness, 5);
    }

    #[test]
    fn test_big_five_jump_in_raises_openness_and_neuroticism() {
        let jump = AssessmentResponse {
            question_id: "personality_2".to_string(),
            answer: AnswerValue::Single("Jump in and figure it out".to_string()),
            category: "personality".to_string(),
            weight: 1.0,
        };
        let (traits, _) = aggregate_big_five(&[jump]);
        assert_eq!(traits.openness, 6);
        // 5.5 rounds away from zero
        assert_eq!(traits.neuroticism, 6);
    }

    #[test]
    fn test_big_five_risk_rating_moves_openness_against_neuroticism() {
        let (traits, _) = aggregate_big_five(&[rating("personality_3", 10.0)]);
        assert_eq!(traits.openness, 6);
        assert_eq!(traits.neuroticism, 4);
    }
}
