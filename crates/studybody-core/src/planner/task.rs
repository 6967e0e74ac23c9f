//! Study task types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed subject enumeration for the planner.
///
/// `Other` doubles as the fallback for anything outside the fixed list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Chemistry,
    Biology,
    Pharmacy,
    Math,
    English,
    #[default]
    Other,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Chemistry,
        Subject::Biology,
        Subject::Pharmacy,
        Subject::Math,
        Subject::English,
        Subject::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::Pharmacy => "pharmacy",
            Subject::Math => "math",
            Subject::English => "english",
            Subject::Other => "other",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chemistry" => Ok(Subject::Chemistry),
            "biology" => Ok(Subject::Biology),
            "pharmacy" => Ok(Subject::Pharmacy),
            "math" => Ok(Subject::Math),
            "english" => Ok(Subject::English),
            "other" => Ok(Subject::Other),
            unknown => Err(format!(
                "unknown subject '{unknown}', expected one of chemistry/biology/pharmacy/math/english/other"
            )),
        }
    }
}

/// A planned unit of study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTask {
    /// Stable id, assigned on add.
    pub id: String,
    pub subject: Subject,
    /// Free-form topic or unit description.
    pub topic: String,
    /// Planned duration in minutes.
    pub planned_minutes: u32,
    /// Whether the task has been completed.
    pub done: bool,
    /// Day the task is planned for.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_parse_case_insensitive() {
        assert_eq!("Chemistry".parse::<Subject>().unwrap(), Subject::Chemistry);
        assert_eq!("MATH".parse::<Subject>().unwrap(), Subject::Math);
        assert!("history".parse::<Subject>().is_err());
    }

    #[test]
    fn test_subject_roundtrip_display() {
        for subject in Subject::ALL {
            assert_eq!(subject.label().parse::<Subject>().unwrap(), subject);
        }
    }
}
