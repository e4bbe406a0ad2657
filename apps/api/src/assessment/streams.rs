//! Picks the recommended higher-secondary stream.
//!
//! Two paths exist on purpose. `determine_stream` is the questionnaire path:
//! a linear formula per stream over the interest and trait vectors.
//! `recommend_streams` is the adaptive path: all four streams ranked by a
//! baseline-plus-bonus suitability. The paths produce different shapes and
//! are both wired to live call sites.

use serde::{Deserialize, Serialize};

use crate::models::assessment::{
    AnswerValue, AssessmentResponse, InterestScores, PersonalityTraits, StreamRecommendation,
};

/// The four academic streams, in declaration order. Order matters: exact
/// score ties resolve to the earlier stream (the scan uses strict `>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    #[serde(rename = "MPC")]
    Mpc,
    #[serde(rename = "BiPC")]
    BiPc,
    Commerce,
    Arts,
}

impl Stream {
    pub const ALL: [Stream; 4] = [Stream::Mpc, Stream::BiPc, Stream::Commerce, Stream::Arts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Mpc => "MPC",
            Stream::BiPc => "BiPC",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreamChoice {
    pub stream: Stream,
    pub probability: u8,
}

fn stream_score(stream: Stream, interests: &InterestScores, traits: &PersonalityTraits) -> f64 {
    let t = |v: u8| f64::from(v);
    match stream {
        Stream::Mpc => interests.science + interests.technology + t(traits.analytical) * 0.5,
        Stream::BiPc => interests.science + interests.social * 0.5 + t(traits.analytical) * 0.3,
        Stream::Commerce => {
            interests.business + t(traits.leadership) * 0.4 + t(traits.risk_tolerance) * 0.3
        }
        Stream::Arts => interests.arts + t(traits.creative) * 0.6 + interests.social * 0.3,
    }
}

/// Selects the single best-fitting stream and a success probability.
///
/// Probability is the max score mapped onto a percentage of a 20-point scale
/// and clamped into [60, 95]; every well-formed input yields a result.
pub fn determine_stream(interests: &InterestScores, traits: &PersonalityTraits) -> StreamChoice {
    let mut best = Stream::ALL[0];
    let mut best_score = stream_score(best, interests, traits);

    for stream in Stream::ALL.into_iter().skip(1) {
        let score = stream_score(stream, interests, traits);
        // Strict `>` keeps the earlier-declared stream on ties. Quirk carried
        // over from the shipped behavior; do not "fix" to `>=`.
        if score > best_score {
            best = stream;
            best_score = score;
        }
    }

    let probability = (best_score / 20.0 * 100.0).round().clamp(60.0, 95.0) as u8;
    StreamChoice {
        stream: best,
        probability,
    }
}

struct StreamSeed {
    label: &'static str,
    careers: [&'static str; 4],
    subjects: &'static [&'static str],
    suitability_bonus: u8,
    success_bonus: u8,
}

/// Adaptive-path seeds. Baseline suitability and success are both 50; one
/// bonus applies per stream when any of its subjects was picked.
const STREAM_SEEDS: [StreamSeed; 4] = [
    StreamSeed {
        label: "MPC (Math, Physics, Chemistry)",
        careers: ["Engineering", "Research", "Technology", "Architecture"],
        subjects: &["Mathematics", "Physics", "Chemistry"],
        suitability_bonus: 20,
        success_bonus: 15,
    },
    StreamSeed {
        label: "BiPC (Biology, Physics, Chemistry)",
        careers: ["Medicine", "Pharmacy", "Biotechnology", "Research"],
        subjects: &["Biology", "Chemistry", "Physics"],
        suitability_bonus: 20,
        success_bonus: 15,
    },
    StreamSeed {
        label: "Commerce",
        careers: ["Business", "Finance", "Accounting", "Economics"],
        subjects: &["Economics", "Mathematics"],
        suitability_bonus: 15,
        success_bonus: 12,
    },
    StreamSeed {
        label: "Arts/Humanities",
        careers: ["Literature", "Psychology", "Social Work", "Journalism"],
        subjects: &["English", "History", "Languages"],
        suitability_bonus: 15,
        success_bonus: 12,
    },
];

const BASELINE: u8 = 50;
const SUITABILITY_CAP: u8 = 95;
const SUCCESS_CAP: u8 = 90;

/// Ranks all four streams by suitability for the adaptive path.
///
/// The sort is stable, so on equal suitability the seed order above decides.
pub fn recommend_streams(responses: &[AssessmentResponse]) -> Vec<StreamRecommendation> {
    let picked: &[String] = responses
        .iter()
        .find(|r| r.question_id == "academics_1")
        .and_then(|r| match &r.answer {
            AnswerValue::Multi(subjects) => Some(subjects.as_slice()),
            _ => None,
        })
        .unwrap_or(&[]);

    let mut recommendations: Vec<StreamRecommendation> = STREAM_SEEDS
        .iter()
        .map(|seed| {
            let matched = seed
                .subjects
                .iter()
                .any(|subject| picked.iter().any(|p| p == subject));
            let (suitability, success) = if matched {
                (
                    (BASELINE + seed.suitability_bonus).min(SUITABILITY_CAP),
                    (BASELINE + seed.success_bonus).min(SUCCESS_CAP),
                )
            } else {
                (BASELINE, BASELINE)
            };
            StreamRecommendation {
                stream: seed.label.to_string(),
                suitability,
                careers: seed.careers.iter().map(|c| c.to_string()).collect(),
                success_probability: success,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.suitability.cmp(&a.suitability));
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(question_id: &str, subjects: &[&str]) -> AssessmentResponse {
        AssessmentResponse {
            question_id: question_id.to_string(),
            answer: AnswerValue::Multi(subjects.iter().map(|s| s.to_string()).collect()),
            category: "academics".to_string(),
            weight: 1.0,
        }
    }

    #[test]
    fn test_neutral_input_is_deterministic_and_clamped_to_floor() {
        // With zero interests and all-5 traits the formulas give
        // MPC 2.5, BiPC 1.5, Commerce 3.5, Arts 3.0.
        let choice = determine_stream(&InterestScores::default(), &PersonalityTraits::default());
        assert_eq!(choice.stream, Stream::Commerce);
        assert_eq!(choice.probability, 60, "low scores clamp to the floor");
    }

    #[test]
    fn test_technology_interest_favors_mpc() {
        let interests = InterestScores {
            technology: 3.0,
            ..InterestScores::default()
        };
        let choice = determine_stream(&interests, &PersonalityTraits::default());
        assert_eq!(choice.stream, Stream::Mpc);
    }

    #[test]
    fn test_exact_tie_goes_to_earlier_stream() {
        // science drives both MPC and BiPC; make their formulas equal.
        // MPC = s + 0 + 2.5, BiPC = s + social*0.5 + 1.5. With social = 2 they
        // tie exactly at s + 2.5.
        let interests = InterestScores {
            science: 10.0,
            social: 2.0,
            ..InterestScores::default()
        };
        let traits = PersonalityTraits::default();
        assert_eq!(
            stream_score(Stream::Mpc, &interests, &traits),
            stream_score(Stream::BiPc, &interests, &traits)
        );
        assert_eq!(determine_stream(&interests, &traits).stream, Stream::Mpc);
    }

    #[test]
    fn test_probability_clamped_to_ceiling() {
        let interests = InterestScores {
            science: 30.0,
            technology: 30.0,
            ..InterestScores::default()
        };
        let choice = determine_stream(&interests, &PersonalityTraits::default());
        assert_eq!(choice.probability, 95);
    }

    #[test]
    fn test_probability_always_in_band() {
        for science in [0.0, 5.0, 12.0, 19.0, 40.0] {
            let interests = InterestScores {
                science,
                ..InterestScores::default()
            };
            let p = determine_stream(&interests, &PersonalityTraits::default()).probability;
            assert!((60..=95).contains(&p), "probability {p} outside band");
        }
    }

    #[test]
    fn test_recommend_streams_returns_all_four_sorted() {
        let recs = recommend_streams(&[multi("academics_1", &["Mathematics", "Biology"])]);
        assert_eq!(recs.len(), 4);
        for pair in recs.windows(2) {
            assert!(pair[0].suitability >= pair[1].suitability);
        }
        // Math triggers MPC and Commerce; Biology triggers BiPC.
        assert!(recs[0].stream.starts_with("MPC"));
        assert_eq!(recs[0].suitability, 70);
        assert_eq!(recs[0].success_probability, 65);
    }

    #[test]
    fn test_recommend_streams_without_academics_stays_at_baseline() {
        let recs = recommend_streams(&[]);
        assert!(recs.iter().all(|r| r.suitability == 50));
        assert!(recs.iter().all(|r| r.success_probability == 50));
        // Stable sort keeps seed declaration order on ties.
        assert!(recs[0].stream.starts_with("MPC"));
        assert!(recs[3].stream.starts_with("Arts"));
    }

    #[test]
    fn test_suitability_never_exceeds_caps() {
        let recs = recommend_streams(&[multi(
            "academics_1",
            &["Mathematics", "Physics", "Chemistry", "Biology", "Economics"],
        )]);
        assert!(recs.iter().all(|r| r.suitability <= 95));
        assert!(recs.iter().all(|r| r.success_probability <= 90));
    }
}
