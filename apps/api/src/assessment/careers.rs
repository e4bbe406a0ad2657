//! Ranks the static career catalogs against a scoring run.
//!
//! Catalogs are read-only reference data baked into the binary. Both matchers
//! return the full ranked list; callers truncate to their own top-N.

use crate::assessment::streams::Stream;
use crate::models::assessment::{
    AnswerValue, AssessmentResponse, BigFiveProfile, CareerMatch, InterestScores,
    PersonalityTraits, RankedCareer,
};

/// Stream requirement on a catalog record. `Any` always earns the bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRequirement {
    Only(Stream),
    Any,
}

impl StreamRequirement {
    fn matches(&self, recommended: Stream) -> bool {
        match self {
            StreamRequirement::Only(stream) => *stream == recommended,
            StreamRequirement::Any => true,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            StreamRequirement::Only(stream) => stream.as_str(),
            StreamRequirement::Any => "Any",
        }
    }
}

struct CareerRecord {
    title: &'static str,
    description: &'static str,
    average_salary: &'static str,
    job_growth: &'static str,
    required_stream: StreamRequirement,
    skills_required: &'static [&'static str],
    /// (factor, weight) pairs; the factor resolves against the interest
    /// vector first, then the trait vector.
    match_factors: &'static [(&'static str, f64)],
}

const QUESTIONNAIRE_CATALOG: [CareerRecord; 5] = [
    CareerRecord {
        title: "Software Engineer",
        description: "Design and develop software applications and systems",
        average_salary: "₹8-15 LPA",
        job_growth: "High",
        required_stream: StreamRequirement::Only(Stream::Mpc),
        skills_required: &["Programming", "Problem Solving", "Mathematics", "Logic"],
        match_factors: &[("technology", 3.0), ("science", 2.0), ("analytical", 0.8)],
    },
    CareerRecord {
        title: "Data Scientist",
        description: "Analyze complex data to help organizations make decisions",
        average_salary: "₹10-20 LPA",
        job_growth: "Very High",
        required_stream: StreamRequirement::Only(Stream::Mpc),
        skills_required: &["Statistics", "Python", "Machine Learning", "Analytics"],
        match_factors: &[("science", 3.0), ("technology", 2.0), ("analytical", 0.9)],
    },
    CareerRecord {
        title: "Doctor",
        description: "Diagnose and treat patients in various medical specialties",
        average_salary: "₹8-25 LPA",
        job_growth: "Stable",
        required_stream: StreamRequirement::Only(Stream::BiPc),
        skills_required: &["Medical Knowledge", "Empathy", "Problem Solving", "Communication"],
        match_factors: &[("science", 3.0), ("social", 2.0), ("analytical", 0.6)],
    },
    CareerRecord {
        title: "Business Analyst",
        description: "Analyze business processes and recommend improvements",
        average_salary: "₹6-12 LPA",
        job_growth: "High",
        required_stream: StreamRequirement::Only(Stream::Commerce),
        skills_required: &["Analysis", "Communication", "Business Acumen", "Problem Solving"],
        match_factors: &[("business", 3.0), ("analytical", 0.7), ("social", 1.0)],
    },
    CareerRecord {
        title: "Graphic Designer",
        description: "Create visual content for digital and print media",
        average_salary: "₹4-8 LPA",
        job_growth: "Medium",
        required_stream: StreamRequirement::Only(Stream::Arts),
        skills_required: &["Creativity", "Design Software", "Visual Communication", "Artistic Skills"],
        match_factors: &[("arts", 3.0), ("creative", 0.9), ("technology", 1.0)],
    },
];

const STREAM_BONUS: f64 = 5.0;
const MATCH_SCALE: f64 = 3.0;
const QUESTIONNAIRE_FLOOR: f64 = 40.0;
const CEILING: f64 = 95.0;

/// Ranks the questionnaire-path catalog against the computed vectors.
///
/// Stable descending sort: catalog declaration order breaks percentage ties.
pub fn match_careers(
    interests: &InterestScores,
    traits: &PersonalityTraits,
    recommended: Stream,
) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = QUESTIONNAIRE_CATALOG
        .iter()
        .map(|career| {
            let mut score = 0.0f64;
            for (factor, weight) in career.match_factors {
                if let Some(value) = interests.get(factor).or_else(|| traits.get(factor)) {
                    score += value * weight;
                }
            }
            if career.required_stream.matches(recommended) {
                score += STREAM_BONUS;
            }
            let percentage =
                (score * MATCH_SCALE).round().clamp(QUESTIONNAIRE_FLOOR, CEILING) as u8;
            CareerMatch {
                title: career.title.to_string(),
                description: career.description.to_string(),
                match_percentage: percentage,
                average_salary: career.average_salary.to_string(),
                job_growth: career.job_growth.to_string(),
                required_stream: career.required_stream.as_str().to_string(),
                skills_required: career
                    .skills_required
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }
        })
        .collect();

    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches
}

struct CareerEntry {
    title: &'static str,
    description: &'static str,
    salary_range: &'static str,
    growth_potential: &'static str,
    education_path: &'static str,
    skills: &'static [&'static str],
}

const ADAPTIVE_CATALOG: [CareerEntry; 8] = [
    CareerEntry {
        title: "Software Engineer",
        description: "Design and develop software applications and systems",
        salary_range: "₹6-20 LPA",
        growth_potential: "Very High",
        education_path: "Computer Science/IT Engineering",
        skills: &["Programming", "Problem Solving", "Logic", "Mathematics"],
    },
    CareerEntry {
        title: "Data Scientist",
        description: "Analyze complex data to extract insights and drive business decisions",
        salary_range: "₹8-25 LPA",
        growth_potential: "Very High",
        education_path: "Statistics/Mathematics/Computer Science",
        skills: &["Statistics", "Programming", "Machine Learning", "Analytics"],
    },
    CareerEntry {
        title: "Doctor",
        description: "Diagnose and treat patients to improve health outcomes",
        salary_range: "₹8-30 LPA",
        growth_potential: "High",
        education_path: "MBBS + Specialization",
        skills: &["Biology", "Chemistry", "Empathy", "Problem Solving"],
    },
    CareerEntry {
        title: "Mechanical Engineer",
        description: "Design and develop mechanical systems and products",
        salary_range: "₹5-18 LPA",
        growth_potential: "High",
        education_path: "Mechanical Engineering",
        skills: &["Physics", "Mathematics", "Design", "Problem Solving"],
    },
    CareerEntry {
        title: "Financial Analyst",
        description: "Analyze financial data and market trends for investment decisions",
        salary_range: "₹6-22 LPA",
        growth_potential: "High",
        education_path: "Commerce/Economics/Finance",
        skills: &["Mathematics", "Economics", "Analytics", "Communication"],
    },
    CareerEntry {
        title: "Graphic Designer",
        description: "Create visual content for digital and print media",
        salary_range: "₹3-12 LPA",
        growth_potential: "Medium",
        education_path: "Fine Arts/Design",
        skills: &["Creativity", "Design Software", "Visual Arts", "Communication"],
    },
    CareerEntry {
        title: "Teacher",
        description: "Educate and inspire students in academic subjects",
        salary_range: "₹3-10 LPA",
        growth_potential: "Medium",
        education_path: "Subject Specialization + B.Ed",
        skills: &["Communication", "Patience", "Subject Knowledge", "Leadership"],
    },
    CareerEntry {
        title: "Marketing Manager",
        description: "Develop and execute marketing strategies to promote products/services",
        salary_range: "₹5-18 LPA",
        growth_potential: "High",
        education_path: "Marketing/Business Administration",
        skills: &["Communication", "Creativity", "Analytics", "Leadership"],
    },
];

const ADAPTIVE_BASE: f64 = 50.0;
const INTEREST_OVERLAP_BONUS: f64 = 5.0;
const ACADEMIC_OVERLAP_BONUS: f64 = 8.0;
const ARCHETYPE_BONUS: f64 = 15.0;
const ADAPTIVE_FLOOR: f64 = 20.0;

fn overlaps(skill: &str, term: &str) -> bool {
    let skill = skill.to_lowercase();
    let term = term.to_lowercase();
    skill.contains(&term) || term.contains(&skill)
}

/// Ranks the adaptive-path catalog by interest/academic overlap and
/// archetype alignment. Full list, stable descending sort.
pub fn rank_careers(
    responses: &[AssessmentResponse],
    profile: &BigFiveProfile,
) -> Vec<RankedCareer> {
    let selections = |needle: &str| -> Vec<&String> {
        responses
            .iter()
            .filter(|r| r.question_id.contains(needle))
            .filter_map(|r| match &r.answer {
                AnswerValue::Multi(values) => Some(values.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    };
    let interests = selections("interests");
    let subjects = selections("academics");

    let mut ranked: Vec<RankedCareer> = ADAPTIVE_CATALOG
        .iter()
        .map(|career| {
            let mut score = ADAPTIVE_BASE;

            for interest in &interests {
                if career.skills.iter().any(|skill| overlaps(skill, interest)) {
                    score += INTEREST_OVERLAP_BONUS;
                }
            }
            for subject in &subjects {
                if career.skills.iter().any(|skill| overlaps(skill, subject)) {
                    score += ACADEMIC_OVERLAP_BONUS;
                }
            }

            let aligned = match profile.archetype.as_str() {
                "Analyst" => career.title.contains("Data"),
                "Helper" => career.title.contains("Doctor") || career.title.contains("Teacher"),
                "Innovator" => career.title.contains("Engineer"),
                "Leader" => career.title.contains("Manager"),
                _ => false,
            };
            if aligned {
                score += ARCHETYPE_BONUS;
            }

            RankedCareer {
                title: career.title.to_string(),
                description: career.description.to_string(),
                match_percentage: score.round().clamp(ADAPTIVE_FLOOR, CEILING) as u8,
                salary_range: career.salary_range.to_string(),
                growth_potential: career.growth_potential.to_string(),
                education_path: career.education_path.to_string(),
                skills: career.skills.iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::BigFiveTraits;

    fn tech_interests() -> InterestScores {
        InterestScores {
            technology: 6.0,
            science: 3.0,
            ..InterestScores::default()
        }
    }

    fn profile(archetype: &str) -> BigFiveProfile {
        BigFiveProfile {
            archetype: archetype.to_string(),
            traits: BigFiveTraits::default(),
            description: String::new(),
        }
    }

    fn multi(question_id: &str, values: &[&str]) -> AssessmentResponse {
        AssessmentResponse {
            question_id: question_id.to_string(),
            answer: AnswerValue::Multi(values.iter().map(|s| s.to_string()).collect()),
            category: "general".to_string(),
            weight: 1.0,
        }
    }

    #[test]
    fn test_full_catalog_returned_sorted_descending() {
        let matches = match_careers(&tech_interests(), &PersonalityTraits::default(), Stream::Mpc);
        assert_eq!(matches.len(), QUESTIONNAIRE_CATALOG.len());
        for pair in matches.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_match_percentage_stays_in_band() {
        let extreme = InterestScores {
            science: 50.0,
            technology: 50.0,
            arts: 50.0,
            business: 50.0,
            social: 50.0,
            practical: 50.0,
        };
        for career in match_careers(&extreme, &PersonalityTraits::default(), Stream::Mpc) {
            assert!((40..=95).contains(&career.match_percentage));
        }
        for career in match_careers(
            &InterestScores::default(),
            &PersonalityTraits {
                analytical: 1,
                creative: 1,
                leadership: 1,
                risk_tolerance: 1,
            },
            Stream::Arts,
        ) {
            assert!((40..=95).contains(&career.match_percentage));
        }
    }

    #[test]
    fn test_stream_bonus_lifts_matching_careers() {
        let neutral = InterestScores::default();
        let traits = PersonalityTraits::default();
        let with_mpc = match_careers(&neutral, &traits, Stream::Mpc);
        let with_arts = match_careers(&neutral, &traits, Stream::Arts);

        let engineer_mpc = with_mpc.iter().find(|c| c.title == "Software Engineer").unwrap();
        let engineer_arts = with_arts.iter().find(|c| c.title == "Software Engineer").unwrap();
        assert!(engineer_mpc.match_percentage >= engineer_arts.match_percentage);
    }

    #[test]
    fn test_technology_leaning_input_ranks_engineer_first() {
        let matches = match_careers(&tech_interests(), &PersonalityTraits::default(), Stream::Mpc);
        assert_eq!(matches[0].title, "Software Engineer");
    }

    #[test]
    fn test_catalog_tie_breaks_by_declaration_order() {
        // All scores clamp to the floor, so every entry ties at 40 and the
        // stable sort must preserve catalog order.
        let matches = match_careers(
            &InterestScores::default(),
            &PersonalityTraits {
                analytical: 1,
                creative: 1,
                leadership: 1,
                risk_tolerance: 1,
            },
            Stream::BiPc,
        );
        assert!(matches.iter().all(|c| c.match_percentage == 40));
        let titles: Vec<&str> = matches.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Software Engineer", "Data Scientist", "Doctor", "Business Analyst", "Graphic Designer"]
        );
    }

    #[test]
    fn test_rank_careers_base_score_without_signals() {
        let ranked = rank_careers(&[], &profile("Explorer"));
        assert_eq!(ranked.len(), ADAPTIVE_CATALOG.len());
        assert!(ranked.iter().all(|c| c.match_percentage == 50));
    }

    #[test]
    fn test_rank_careers_archetype_bonus() {
        let ranked = rank_careers(&[], &profile("Analyst"));
        let data = ranked.iter().find(|c| c.title == "Data Scientist").unwrap();
        assert_eq!(data.match_percentage, 65);
        assert_eq!(ranked[0].title, "Data Scientist");
    }

    #[test]
    fn test_rank_careers_academic_overlap_beats_interest_overlap() {
        let by_interest = rank_careers(
            &[multi("interests_1", &["Programming"])],
            &profile("Explorer"),
        );
        let by_subject = rank_careers(
            &[multi("academics_1", &["Programming"])],
            &profile("Explorer"),
        );
        let interest_engineer = by_interest
            .iter()
            .find(|c| c.title == "Software Engineer")
            .unwrap();
        let subject_engineer = by_subject
            .iter()
            .find(|c| c.title == "Software Engineer")
            .unwrap();
        assert_eq!(interest_engineer.match_percentage, 55);
        assert_eq!(subject_engineer.match_percentage, 58);
    }

    #[test]
    fn test_rank_careers_clamped_to_95() {
        let loaded = vec![
            multi("interests_1", &["Programming", "Mathematics", "Logic", "Problem Solving"]),
            multi(
                "academics_1",
                &["Programming", "Mathematics", "Logic", "Problem Solving"],
            ),
        ];
        let ranked = rank_careers(&loaded, &profile("Innovator"));
        assert!(ranked.iter().all(|c| c.match_percentage <= 95));
        let engineer = ranked.iter().find(|c| c.title == "Software Engineer").unwrap();
        assert_eq!(engineer.match_percentage, 95);
    }
}
