//! Personality classification.
//!
//! Two strategies coexist and are NOT interchangeable: the questionnaire path
//! uses ordered threshold rules over the four-trait vector, the adaptive path
//! uses nearest-neighbor matching over Big Five archetypes. Call sites depend
//! on each one's specific behavior, so both are kept as named types behind
//! the `PersonalityClassifier` trait.

use crate::models::assessment::{AnswerValue, AssessmentResponse, BigFiveTraits, PersonalityTraits};

/// Seam between the scoring engine and a classification strategy.
/// Carried in `AppState` as a trait object for the questionnaire path.
pub trait PersonalityClassifier: Send + Sync {
    type Traits;

    fn label(&self, traits: &Self::Traits) -> &'static str;
}

/// Ordered first-match threshold rules. Rule order is load-bearing: the rules
/// are not mutually exclusive, so reordering changes observable labels.
pub struct ThresholdClassifier;

impl PersonalityClassifier for ThresholdClassifier {
    type Traits = PersonalityTraits;

    fn label(&self, traits: &PersonalityTraits) -> &'static str {
        if traits.analytical >= 7 && traits.creative <= 5 {
            "Analytical Thinker"
        } else if traits.creative >= 7 && traits.analytical <= 5 {
            "Creative Innovator"
        } else if traits.leadership >= 7 {
            "Natural Leader"
        } else if traits.analytical >= 6 && traits.creative >= 6 {
            "Balanced Problem Solver"
        } else {
            "Adaptable Collaborator"
        }
    }
}

/// One reference archetype for the nearest-neighbor strategy.
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
    pub traits: BigFiveTraits,
}

/// Reference table, in declaration order. Ties on match score resolve to the
/// earlier archetype (strict `>` scan).
pub const ARCHETYPES: [Archetype; 5] = [
    Archetype {
        name: "Innovator",
        description: "Creative problem-solver who thrives on new challenges and innovative solutions",
        traits: BigFiveTraits {
            openness: 9,
            conscientiousness: 7,
            extraversion: 6,
            agreeableness: 6,
            neuroticism: 4,
        },
    },
    Archetype {
        name: "Analyst",
        description: "Logical thinker who excels at data analysis and systematic problem-solving",
        traits: BigFiveTraits {
            openness: 7,
            conscientiousness: 9,
            extraversion: 4,
            agreeableness: 5,
            neuroticism: 3,
        },
    },
    Archetype {
        name: "Helper",
        description: "Empathetic individual focused on supporting and developing others",
        traits: BigFiveTraits {
            openness: 6,
            conscientiousness: 8,
            extraversion: 7,
            agreeableness: 9,
            neuroticism: 4,
        },
    },
    Archetype {
        name: "Leader",
        description: "Natural leader who excels at organizing teams and driving results",
        traits: BigFiveTraits {
            openness: 7,
            conscientiousness: 8,
            extraversion: 9,
            agreeableness: 7,
            neuroticism: 3,
        },
    },
    Archetype {
        name: "Explorer",
        description: "Curious and adaptable individual who enjoys learning and new experiences",
        traits: BigFiveTraits {
            openness: 9,
            conscientiousness: 6,
            extraversion: 6,
            agreeableness: 7,
            neuroticism: 5,
        },
    },
];

/// 1-nearest-neighbor under L1 distance against the archetype table.
/// Match score is `50 - Σ|user - reference|`; highest wins.
pub struct NearestNeighborClassifier;

impl NearestNeighborClassifier {
    pub fn match_score(user: &BigFiveTraits, reference: &BigFiveTraits) -> i32 {
        50 - user.l1_distance(reference) as i32
    }

    pub fn best_match(&self, traits: &BigFiveTraits) -> &'static Archetype {
        let mut best = &ARCHETYPES[0];
        let mut best_score = Self::match_score(traits, &best.traits);
        for archetype in &ARCHETYPES[1..] {
            let score = Self::match_score(traits, &archetype.traits);
            if score > best_score {
                best = archetype;
                best_score = score;
            }
        }
        best
    }
}

impl PersonalityClassifier for NearestNeighborClassifier {
    type Traits = BigFiveTraits;

    fn label(&self, traits: &BigFiveTraits) -> &'static str {
        self.best_match(traits).name
    }
}

/// Work-style label for the questionnaire profile. First-match precedence.
pub fn work_style(traits: &PersonalityTraits) -> &'static str {
    if traits.leadership >= 7 {
        "Team Leader"
    } else if traits.analytical >= 7 {
        "Independent"
    } else if traits.creative >= 7 {
        "Collaborative"
    } else {
        "Flexible"
    }
}

/// Learning-style label from the dedicated learning-style question.
pub fn learning_style(responses: &[AssessmentResponse]) -> &'static str {
    let answer = responses
        .iter()
        .find(|r| r.question_id == "learning-style-1")
        .and_then(|r| match &r.answer {
            AnswerValue::Single(choice) => Some(choice.as_str()),
            _ => None,
        });

    match answer {
        Some("Visual aids and diagrams") => "Visual",
        Some("Hands-on practice and experiments") => "Kinesthetic",
        Some("Reading and writing") => "Reading/Writing",
        Some("Discussion and group work") | Some("Audio lectures and podcasts") => "Auditory",
        Some(_) => "Multimodal",
        None => "Visual",
    }
}
