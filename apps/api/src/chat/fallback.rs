//! Canned-response tables for the chatbot and mentor chat.
//!
//! These are the deterministic floor under the LLM enhancement: keyword
//! routing picks a topic, and the variant within a topic is chosen through
//! the caller-supplied RNG so tests can pin outputs with a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

pub const QUICK_SUGGESTIONS: [&str; 6] = [
    "Tell me about engineering careers",
    "How to choose between science streams?",
    "What are good commerce career options?",
    "Should I consider studying abroad?",
    "How to prepare for competitive exams?",
    "What skills are in demand today?",
];

const GREETING: [&str; 3] = [
    "Hello! I'm here to help you with career guidance. What would you like to explore today?",
    "Hi there! I'm your AI career counselor. How can I assist you with your career planning?",
    "Welcome! I'm excited to help you discover your perfect career path. What's on your mind?",
];

const CAREER: [&str; 3] = [
    "There are many exciting career paths available! For engineering, consider streams like Computer Science, Electronics, or Mechanical. For medical careers, focus on Biology and Chemistry. Commerce opens doors to CA, CS, and MBA programs. What specific field interests you most?",
    "Career choices can be overwhelming, but that's what I'm here for! Let's start by understanding your interests. Are you more drawn to technical fields like engineering, healthcare like medicine, business like commerce, or creative fields like arts?",
    "Great question about careers! The key is finding something that matches your interests and strengths. Would you like to explore specific fields like technology, healthcare, business, or creative arts?",
];

const STREAM: [&str; 3] = [
    "Choosing the right stream is crucial! MPC (Math, Physics, Chemistry) is great for engineering. BiPC (Biology, Physics, Chemistry) leads to medical careers. Commerce suits business-minded students. Arts offers creative and humanities options. Take our assessment to find your perfect match!",
    "Stream selection is one of the most important decisions! Each stream opens different doors: MPC for engineering and tech, BiPC for medical and life sciences, Commerce for business and finance, Arts for creative and social fields. What are your natural strengths?",
    "The right stream depends on your interests and career goals. Science streams (MPC/BiPC) are great for technical and medical fields, Commerce for business careers, and Arts for creative and social sciences. Have you taken our career assessment yet?",
];

const ENGINEERING: [&str; 3] = [
    "Engineering offers diverse opportunities! Popular branches include Computer Science (software development), Electronics (hardware/embedded systems), Mechanical (manufacturing/automotive), and Civil (construction/infrastructure). Focus on JEE preparation and consider your interests in math and physics.",
    "Engineering is fantastic! With branches like CSE, ECE, Mechanical, Civil, and newer fields like AI/ML, there's something for everyone. Strong math and physics foundation is key. Are you interested in any specific engineering branch?",
    "The engineering field is booming in India! From traditional branches like Mechanical and Civil to modern ones like Computer Science and AI, opportunities are endless. JEE is your gateway. What type of problems do you enjoy solving?",
];

const MEDICAL: [&str; 3] = [
    "Medical careers are rewarding! MBBS leads to becoming a doctor, while other options include pharmacy, physiotherapy, nursing, and medical research. Strong foundation in Biology and Chemistry is essential. NEET is the main entrance exam to focus on.",
    "Healthcare offers many fulfilling career paths! Beyond MBBS, consider BDS (dentistry), pharmacy, physiotherapy, or medical research. All require strong science background and NEET qualification. What aspect of healthcare interests you?",
    "Medical field is noble and rewarding! Options include doctor (MBBS), dentist (BDS), pharmacist, physiotherapist, or medical researcher. Biology and Chemistry are crucial subjects. Have you started NEET preparation?",
];

const COMMERCE: [&str; 3] = [
    "Commerce opens many doors! You can pursue CA (Chartered Accountancy), CS (Company Secretary), CMA (Cost Management), or MBA. Other options include banking, finance, marketing, and entrepreneurship. Strong analytical and communication skills are valuable.",
    "Business and commerce have excellent prospects! CA and CS are prestigious options, while MBA opens management roles. Banking, finance, marketing, and entrepreneurship are also great paths. What interests you more - numbers or people?",
    "Commerce stream leads to exciting business careers! From traditional CA/CS to modern digital marketing and fintech, opportunities are growing. Strong analytical skills and business acumen are key. Are you interested in finance or marketing?",
];

const EXAMS: [&str; 3] = [
    "Competitive exams are gateways to great careers! JEE for engineering, NEET for medical, CLAT for law, and various others. The key is consistent preparation, understanding concepts, and regular practice. Which exam are you targeting?",
    "Entrance exams can seem daunting, but with right preparation, you can crack them! Focus on understanding concepts rather than rote learning. Create a study schedule and stick to it. Which competitive exam interests you?",
    "Success in competitive exams requires strategy and dedication. Start early, understand the pattern, practice regularly, and take mock tests. Remember, these exams test your understanding, not just memory. Need help with any specific exam?",
];

const SKILLS: [&str; 3] = [
    "Today's job market values both technical and soft skills! For tech careers, learn programming, data analysis, and AI/ML. For all careers, develop communication, problem-solving, and leadership skills. What field are you interested in?",
    "Future-ready skills include digital literacy, critical thinking, creativity, and adaptability. Technical skills like coding, data analysis are in high demand. Soft skills like communication and teamwork are equally important. What skills would you like to develop?",
    "The job market is evolving rapidly! In-demand skills include programming, data science, digital marketing, and AI/ML. Don't forget soft skills like communication, leadership, and emotional intelligence. Which area interests you most?",
];

const DEFAULT: [&str; 3] = [
    "That's a great question! Career planning is important and I'm here to help. Consider taking our comprehensive assessment to discover your interests and strengths. What specific aspect of career planning would you like to discuss?",
    "I'm here to guide you through your career journey! Whether it's choosing streams, preparing for exams, or exploring career options, I can help. What would you like to explore first?",
    "Career decisions can be challenging, but you're not alone! I can help you explore different paths, understand entrance requirements, and plan your academic journey. What's your main concern right now?",
];

fn contains_any(message: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| message.contains(needle))
}

/// Routes a user message to a topic table. Keyword checks run in a fixed
/// order, so a message matching several topics always lands on the same one.
fn topic_table(message: &str) -> &'static [&'static str] {
    let message = message.to_lowercase();

    if contains_any(&message, &["hello", "hi", "hey"]) {
        &GREETING
    } else if contains_any(&message, &["career", "job", "profession"]) {
        &CAREER
    } else if contains_any(&message, &["stream", "subject", "mpc", "bipc", "commerce", "arts"]) {
        &STREAM
    } else if contains_any(&message, &["engineering", "engineer", "jee", "iit"]) {
        &ENGINEERING
    } else if contains_any(&message, &["medical", "doctor", "neet", "mbbs", "medicine"]) {
        &MEDICAL
    } else if contains_any(&message, &["business", "ca", "cs", "mba", "finance"]) {
        &COMMERCE
    } else if contains_any(&message, &["exam", "preparation", "entrance", "competitive"]) {
        &EXAMS
    } else if contains_any(&message, &["skill", "learn", "programming", "coding"]) {
        &SKILLS
    } else {
        &DEFAULT
    }
}

/// Deterministic keyword response; the variant is picked by the caller's RNG.
pub fn keyword_response<R: Rng>(message: &str, rng: &mut R) -> &'static str {
    let table = topic_table(message);
    table.choose(rng).copied().unwrap_or(DEFAULT[0])
}

/// Picks `count` distinct quick suggestions.
pub fn pick_suggestions<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    QUICK_SUGGESTIONS
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

const MENTOR_CAREER: &str = "Great question about careers! Based on my experience in the tech industry, I'd recommend focusing on building strong fundamentals first. What specific field interests you most - engineering, medicine, business, or something else?";
const MENTOR_ENGINEERING: &str = "Engineering is a fantastic field! I've seen many students succeed by focusing on math and physics fundamentals. Consider exploring different branches like Computer Science, Electronics, or Mechanical. Have you thought about what type of problems you'd like to solve?";
const MENTOR_PROGRAMMING: &str = "Programming is an excellent skill to develop! Start with languages like Python or Java. Practice regularly with coding problems and build small projects. The key is consistent practice and understanding core concepts rather than just memorizing syntax.";
const MENTOR_COLLEGE: &str = "Choosing the right college is important, but remember that your effort matters more than the institution. Focus on colleges with good placement records, experienced faculty, and industry connections. What field are you considering?";
const MENTOR_DEFAULT: &str = "That's a thoughtful question! From my experience, success comes from combining passion with practical skills. Focus on understanding your strengths, exploring different options, and building relevant skills. What specific area would you like guidance on?";

/// Mentor fallback is fully deterministic: one reply per topic, no variants.
pub fn mentor_response(message: &str) -> &'static str {
    let message = message.to_lowercase();

    if contains_any(&message, &["career", "job"]) {
        MENTOR_CAREER
    } else if contains_any(&message, &["engineering", "engineer"]) {
        MENTOR_ENGINEERING
    } else if contains_any(&message, &["programming", "coding", "software"]) {
        MENTOR_PROGRAMMING
    } else if contains_any(&message, &["college", "university"]) {
        MENTOR_COLLEGE
    } else {
        MENTOR_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_keyword_routing_is_stable() {
        let mut rng = StdRng::seed_from_u64(7);
        let reply = keyword_response("How should I prepare for NEET?", &mut rng);
        assert!(MEDICAL.contains(&reply));

        let mut rng = StdRng::seed_from_u64(7);
        let again = keyword_response("How should I prepare for NEET?", &mut rng);
        assert_eq!(reply, again, "same seed must give the same variant");
    }

    #[test]
    fn test_greeting_beats_other_topics() {
        let mut rng = StdRng::seed_from_u64(0);
        let reply = keyword_response("Hi, tell me about engineering", &mut rng);
        assert!(GREETING.contains(&reply));
    }

    #[test]
    fn test_unmatched_message_uses_default_table() {
        let mut rng = StdRng::seed_from_u64(3);
        let reply = keyword_response("What is the meaning of life?", &mut rng);
        assert!(DEFAULT.contains(&reply));
    }

    #[test]
    fn test_suggestions_are_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let picks = pick_suggestions(&mut rng, 3);
        assert_eq!(picks.len(), 3);
        let mut deduped = picks.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 3);
        assert!(picks
            .iter()
            .all(|p| QUICK_SUGGESTIONS.contains(&p.as_str())));
    }

    #[test]
    fn test_mentor_routing() {
        assert_eq!(mentor_response("what career should I pick"), MENTOR_CAREER);
        assert_eq!(mentor_response("I love coding"), MENTOR_PROGRAMMING);
        assert_eq!(mentor_response("which college is best"), MENTOR_COLLEGE);
        assert_eq!(mentor_response("hmm"), MENTOR_DEFAULT);
    }
}
