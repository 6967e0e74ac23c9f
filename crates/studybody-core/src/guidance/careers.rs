//! Career recommendations by MBTI type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sixteen MBTI personality types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mbti {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl Mbti {
    pub const ALL: [Mbti; 16] = [
        Mbti::INTJ,
        Mbti::INTP,
        Mbti::ENTJ,
        Mbti::ENTP,
        Mbti::INFJ,
        Mbti::INFP,
        Mbti::ENFJ,
        Mbti::ENFP,
        Mbti::ISTJ,
        Mbti::ISFJ,
        Mbti::ESTJ,
        Mbti::ESFJ,
        Mbti::ISTP,
        Mbti::ISFP,
        Mbti::ESTP,
        Mbti::ESFP,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mbti::INTJ => "INTJ",
            Mbti::INTP => "INTP",
            Mbti::ENTJ => "ENTJ",
            Mbti::ENTP => "ENTP",
            Mbti::INFJ => "INFJ",
            Mbti::INFP => "INFP",
            Mbti::ENFJ => "ENFJ",
            Mbti::ENFP => "ENFP",
            Mbti::ISTJ => "ISTJ",
            Mbti::ISFJ => "ISFJ",
            Mbti::ESTJ => "ESTJ",
            Mbti::ESFJ => "ESFJ",
            Mbti::ISTP => "ISTP",
            Mbti::ISFP => "ISFP",
            Mbti::ESTP => "ESTP",
            Mbti::ESFP => "ESFP",
        }
    }
}

impl fmt::Display for Mbti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mbti {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Mbti::ALL
            .iter()
            .find(|m| m.label() == upper)
            .copied()
            .ok_or_else(|| format!("unknown MBTI type '{s}'"))
    }
}

/// Fallback shown when a name does not parse to a known type.
const NO_MATCH: &[&str] = &["No recommendations available"];

/// Three ordered career recommendations for an MBTI type.
pub fn career_recommendations(mbti: Mbti) -> &'static [&'static str] {
    match mbti {
        Mbti::INTJ => &["Scientist", "Strategy Consultant", "Data Analyst"],
        Mbti::INTP => &["Inventor", "Researcher", "Programmer"],
        Mbti::ENTJ => &["Corporate Executive", "Management Consultant", "Project Manager"],
        Mbti::ENTP => &["Entrepreneur", "Marketer", "Innovator"],
        Mbti::INFJ => &["Writer", "Counselor", "Social Activist"],
        Mbti::INFP => &["Poet", "Artist", "Psychotherapist"],
        Mbti::ENFJ => &["Teacher", "Public Speaker", "HR Specialist"],
        Mbti::ENFP => &["Actor", "Tour Guide", "Content Creator"],
        Mbti::ISTJ => &["Accountant", "Judge", "Civil Servant"],
        Mbti::ISFJ => &["Nurse", "Social Worker", "Librarian"],
        Mbti::ESTJ => &["Manager", "Engineer", "Administrator"],
        Mbti::ESFJ => &["HR Manager", "Chef", "Nursing Assistant"],
        Mbti::ISTP => &["Technician", "Pilot", "Adventurer"],
        Mbti::ISFP => &["Designer", "Musician", "Florist"],
        Mbti::ESTP => &["Salesperson", "Athlete", "Event Host"],
        Mbti::ESFP => &["Actor", "Event Planner", "Travel Guide"],
    }
}

/// Recommendations by free-form name, with an explicit fallback for
/// names that do not parse to a known type.
pub fn recommendations_by_name(name: &str) -> &'static [&'static str] {
    match name.parse::<Mbti>() {
        Ok(mbti) => career_recommendations(mbti),
        Err(_) => NO_MATCH,
    }
}
