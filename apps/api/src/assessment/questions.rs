//! Static question catalog. Externally maintained configuration in spirit;
//! baked in here and served read-only so the client and the aggregator agree
//! on ids, option strings and categories.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Rating,
    MultipleSelect,
    Text,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDef {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: &'static [&'static str],
    pub category: &'static str,
    pub weight: f64,
    pub required: bool,
}

pub const QUESTION_CATALOG: &[QuestionDef] = &[
    // Questionnaire path
    QuestionDef {
        id: "interests-1",
        question: "Which activities do you enjoy in your free time?",
        question_type: QuestionType::MultipleSelect,
        options: &[
            "Reading books and articles",
            "Solving puzzles or brain teasers",
            "Building or fixing things",
            "Creating art, music, or writing",
            "Socializing with friends",
            "Playing video games",
        ],
        category: "interests",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "academics-1",
        question: "Which subjects do you enjoy the most at school?",
        question_type: QuestionType::MultipleSelect,
        options: &[
            "Mathematics",
            "Physics",
            "Chemistry",
            "Biology",
            "Computer Science",
            "English Literature",
            "Art",
            "Music",
            "Economics",
            "Psychology",
            "History",
        ],
        category: "academics",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "personality-1",
        question: "I prefer working alone on complex problems",
        question_type: QuestionType::Rating,
        options: &[],
        category: "personality",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "personality-2",
        question: "I enjoy taking the lead in group activities",
        question_type: QuestionType::Rating,
        options: &[],
        category: "personality",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "risk-tolerance-1",
        question: "I am comfortable taking risks to pursue opportunities",
        question_type: QuestionType::Rating,
        options: &[],
        category: "personality",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "learning-style-1",
        question: "How do you learn best?",
        question_type: QuestionType::MultipleChoice,
        options: &[
            "Visual aids and diagrams",
            "Hands-on practice and experiments",
            "Reading and writing",
            "Discussion and group work",
            "Audio lectures and podcasts",
        ],
        category: "learning",
        weight: 1.0,
        required: false,
    },
    // Adaptive path
    QuestionDef {
        id: "interests_1",
        question: "Which of these areas interest you?",
        question_type: QuestionType::MultipleSelect,
        options: &[
            "Programming",
            "Mathematics",
            "Biology",
            "Economics",
            "Creativity",
            "Communication",
        ],
        category: "interests",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "academics_1",
        question: "Which subjects are you strongest in?",
        question_type: QuestionType::MultipleSelect,
        options: &[
            "Mathematics",
            "Physics",
            "Chemistry",
            "Biology",
            "Economics",
            "English",
            "History",
            "Languages",
        ],
        category: "academics",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "academics_2",
        question: "How confident are you working with numbers?",
        question_type: QuestionType::Rating,
        options: &[],
        category: "academics",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "personality_1",
        question: "How much do you enjoy collaborating in a team?",
        question_type: QuestionType::Rating,
        options: &[],
        category: "personality",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "personality_2",
        question: "When facing a new challenge, what do you do first?",
        question_type: QuestionType::MultipleChoice,
        options: &[
            "Plan carefully before starting",
            "Jump in and figure it out as I go",
            "Ask someone with experience",
        ],
        category: "personality",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "personality_3",
        question: "How comfortable are you with uncertain outcomes?",
        question_type: QuestionType::Rating,
        options: &[],
        category: "personality",
        weight: 1.0,
        required: true,
    },
    QuestionDef {
        id: "personality_4",
        question: "How often do you end up leading a group?",
        question_type: QuestionType::Rating,
        options: &[],
        category: "personality",
        weight: 1.0,
        required: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = QUESTION_CATALOG.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), QUESTION_CATALOG.len());
    }

    #[test]
    fn test_scoring_question_ids_exist_in_catalog() {
        let ids: Vec<&str> = QUESTION_CATALOG.iter().map(|q| q.id).collect();
        for id in [
            "interests-1",
            "academics-1",
            "personality-1",
            "personality-2",
            "risk-tolerance-1",
            "learning-style-1",
            "academics_1",
            "academics_2",
            "personality_1",
            "personality_2",
            "personality_3",
            "personality_4",
        ] {
            assert!(ids.contains(&id), "catalog is missing {id}");
        }
    }

    #[test]
    fn test_select_questions_carry_options() {
        for q in QUESTION_CATALOG {
            match q.question_type {
                QuestionType::MultipleSelect | QuestionType::MultipleChoice => {
                    assert!(!q.options.is_empty(), "{} needs options", q.id)
                }
                QuestionType::Rating | QuestionType::Text => {
                    assert!(q.options.is_empty(), "{} should not list options", q.id)
                }
            }
        }
    }
}
