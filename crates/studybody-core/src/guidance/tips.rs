//! Study-and-health synergy tips by subject.

use crate::planner::Subject;

/// Three ordered tips for a subject.
///
/// Every [`Subject`] variant has an entry, `Other` included, so the
/// lookup is total.
pub fn study_tips(subject: Subject) -> &'static [&'static str] {
    match subject {
        Subject::Chemistry => &[
            "Drink a cup of water before an acid-base session to keep focus steady",
            "Explaining Lewis structures out loud moves them into long-term memory",
            "Skip the extra caffeine; jitters turn into arithmetic slips",
        ],
        Subject::Biology => &[
            "Summarize photosynthesis and respiration as step-by-step flowcharts",
            "A three-minute walk after 30 minutes of study raises alertness and fixes memory",
            "A protein snack keeps both satiety and attention up",
        ],
        Subject::Pharmacy => &[
            "Fix the axes and units first when reading pharmacokinetic graphs",
            "Turn drug interactions into case cards and review them in passes",
            "Keep the caffeine cutoff eight hours before bed for memory consolidation",
        ],
        Subject::Math => &[
            "Build a difficulty ladder: worked example, similar problem, application",
            "Error-note the why, not the what; extracting the rule is the point",
            "Thinking out loud while solving strengthens metacognition",
        ],
        Subject::English => &[
            "Ten minutes of shadowing plus ten new words trains listening and vocabulary together",
            "Five minutes of vocabulary before sleep gets consolidated overnight",
            "Express yourself in short sentences and the grammar follows",
        ],
        Subject::Other => &[
            "Split goals small to collect completion wins often",
            "Silence notifications; focus mode beats willpower",
            "Sixty seconds of stretching at the desk improves blood flow to the brain",
        ],
    }
}
