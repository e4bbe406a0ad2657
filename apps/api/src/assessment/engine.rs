//! Composes the pure scoring stages into full result records.
//!
//! Both entry points are synchronous, side-effect-free functions of their
//! inputs and the static catalogs; they can run concurrently from any number
//! of requests without coordination.

use crate::assessment::aggregator::{aggregate_big_five, aggregate_interests, aggregate_traits};
use crate::assessment::careers::{match_careers, rank_careers};
use crate::assessment::classify::{
    learning_style, work_style, NearestNeighborClassifier, PersonalityClassifier,
};
use crate::assessment::narrative::{confidence_score, narrate, strengths_and_improvements};
use crate::assessment::streams::{determine_stream, recommend_streams};
use crate::models::assessment::{
    AssessmentReport, AssessmentResponse, AssessmentResults, BigFiveProfile, PersonalityProfile,
    PersonalityTraits,
};

/// How many careers the adaptive report keeps.
const TOP_CAREERS: usize = 5;

/// Questionnaire scoring path: interest/trait aggregation, stream choice,
/// career ranking, threshold classification, narration.
pub fn process_assessment(
    responses: &[AssessmentResponse],
    classifier: &dyn PersonalityClassifier<Traits = PersonalityTraits>,
) -> AssessmentResults {
    let (interests, skipped_interests) = aggregate_interests(responses);
    let (traits, skipped_traits) = aggregate_traits(responses);

    let choice = determine_stream(&interests, &traits);
    let career_matches = match_careers(&interests, &traits, choice.stream);
    let strengths_weaknesses = narrate(&traits);

    let personality_profile = PersonalityProfile {
        archetype: classifier.label(&traits).to_string(),
        traits,
        work_style: work_style(&traits).to_string(),
        learning_style: learning_style(responses).to_string(),
    };

    AssessmentResults {
        recommended_stream: choice.stream.to_string(),
        success_probability: choice.probability,
        career_matches,
        personality_profile,
        strengths_weaknesses,
        parent_child_alignment: None,
        skipped_answers: skipped_interests + skipped_traits,
    }
}

/// Adaptive scoring path: Big Five clustering, nearest-neighbor archetype,
/// overlap-based career ranking, stream suitability, confidence.
pub fn evaluate_assessment(responses: &[AssessmentResponse]) -> AssessmentReport {
    let (traits, _skipped) = aggregate_big_five(responses);

    let classifier = NearestNeighborClassifier;
    let archetype = classifier.best_match(&traits);
    let personality_profile = BigFiveProfile {
        archetype: archetype.name.to_string(),
        traits,
        description: archetype.description.to_string(),
    };

    let mut career_matches = rank_careers(responses, &personality_profile);
    career_matches.truncate(TOP_CAREERS);

    let stream_recommendations = recommend_streams(responses);
    let (strengths, improvements) = strengths_and_improvements(responses);
    let confidence = confidence_score(responses);

    AssessmentReport {
        personality_profile,
        career_matches,
        stream_recommendations,
        strengths,
        improvements,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::classify::ThresholdClassifier;
    use crate::models::assessment::AnswerValue;

    fn multi(question_id: &str, values: &[&str]) -> AssessmentResponse {
        AssessmentResponse {
            question_id: question_id.to_string(),
            answer: AnswerValue::Multi(values.iter().map(|s| s.to_string()).collect()),
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
    fn test_computer_science_answer_recommends_mpc() {
        let responses = vec![multi("academics-1", &["Computer Science"])];
        let results = process_assessment(&responses, &ThresholdClassifier);
        assert_eq!(results.recommended_stream, "MPC");
        assert_eq!(results.skipped_answers, 0);
    }

    #[test]
    fn test_empty_input_still_produces_complete_results() {
        let results = process_assessment(&[], &ThresholdClassifier);
        assert_eq!(results.career_matches.len(), 5);
        assert!((60..=95).contains(&results.success_probability));
        assert!(!results.strengths_weaknesses.strengths.is_empty());
        assert!(!results.strengths_weaknesses.weaknesses.is_empty());
        assert_eq!(results.personality_profile.archetype, "Adaptable Collaborator");
        assert_eq!(results.personality_profile.learning_style, "Visual");
        assert!(results.parent_child_alignment.is_none());
    }

    #[test]
    fn test_results_are_order_independent() {
        let a = vec![
            multi("academics-1", &["Mathematics", "Computer Science"]),
            rating("personality-1", 9.0),
            rating("risk-tolerance-1", 3.0),
            multi("interests-1", &["Building or fixing things"]),
        ];
        let mut b = a.clone();
        b.reverse();

        let first = process_assessment(&a, &ThresholdClassifier);
        let second = process_assessment(&b, &ThresholdClassifier);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_skipped_answers_surface_in_results() {
        let responses = vec![
            rating("academics-1", 9.0),      // wrong shape for a multi-select
            multi("personality-1", &["yes"]), // wrong shape for a rating
        ];
        let results = process_assessment(&responses, &ThresholdClassifier);
        assert_eq!(results.skipped_answers, 2);
    }

    #[test]
    fn test_adaptive_report_keeps_top_five_careers() {
        let report = evaluate_assessment(&[]);
        assert_eq!(report.career_matches.len(), 5);
        assert_eq!(report.stream_recommendations.len(), 4);
        assert!((60..=95).contains(&report.confidence));
    }

    #[test]
    fn test_adaptive_report_wires_archetype_description() {
        let report = evaluate_assessment(&[]);
        assert!(!report.personality_profile.description.is_empty());
        assert!(!report.personality_profile.archetype.is_empty());
    }

    #[test]
    fn test_adaptive_career_list_sorted_descending() {
        let responses = vec![
            multi("academics_1", &["Mathematics", "Economics"]),
            multi("interests_1", &["Programming"]),
            rating("personality_1", 8.0),
        ];
        let report = evaluate_assessment(&responses);
        for pair in report.career_matches.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }
}
