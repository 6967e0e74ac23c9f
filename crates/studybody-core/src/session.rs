//! Explicit session state.
//!
//! The day's inputs, the selected guide, and the task list live here as a
//! plain value threaded through calls, never as globals. The rhythm
//! engine stays stateless and only receives numbers derived from this
//! struct.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::energy::{self, Chronotype, EnergyCurve, FocusSlot, ScoreInputs};
use crate::planner::{Planner, Subject};

/// Guide character accompanying the session.
///
/// Which character speaks is behavior; the speech copy itself belongs to
/// the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuideCharacter {
    #[default]
    Neuron,
    AtpMonster,
    DnaFairy,
}

impl GuideCharacter {
    pub fn label(&self) -> &'static str {
        match self {
            GuideCharacter::Neuron => "Neuron",
            GuideCharacter::AtpMonster => "ATP Monster",
            GuideCharacter::DnaFairy => "DNA Fairy",
        }
    }

    /// Short role tag shown next to the name.
    pub fn tag(&self) -> &'static str {
        match self {
            GuideCharacter::Neuron => "memory & focus guide",
            GuideCharacter::AtpMonster => "energy manager",
            GuideCharacter::DnaFairy => "rhythm & recovery",
        }
    }

    /// Character commenting on a subject's synergy tips.
    pub fn for_subject(subject: Subject) -> Self {
        match subject {
            Subject::Chemistry | Subject::Biology => GuideCharacter::Neuron,
            Subject::Pharmacy => GuideCharacter::DnaFairy,
            _ => GuideCharacter::AtpMonster,
        }
    }

    /// Character reacting to the current energy index.
    pub fn for_energy_index(index: u8) -> Self {
        if index < 60 {
            GuideCharacter::AtpMonster
        } else {
            GuideCharacter::Neuron
        }
    }

    /// Character closing the daily report.
    pub fn for_report(index: u8) -> Self {
        if index >= 70 {
            GuideCharacter::Neuron
        } else {
            GuideCharacter::DnaFairy
        }
    }
}

impl fmt::Display for GuideCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GuideCharacter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "neuron" => Ok(GuideCharacter::Neuron),
            "atpmonster" => Ok(GuideCharacter::AtpMonster),
            "dnafairy" => Ok(GuideCharacter::DnaFairy),
            other => Err(format!(
                "unknown guide '{other}', expected neuron/atp-monster/dna-fairy"
            )),
        }
    }
}

/// Session-scoped state: the day's rhythm inputs plus the task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub guide: GuideCharacter,
    #[serde(default)]
    pub chronotype: Chronotype,
    #[serde(default = "default_wake_time")]
    pub wake_time: NaiveTime,
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    #[serde(default = "default_water_cups")]
    pub water_cups: u32,
    #[serde(default = "default_caffeine_servings")]
    pub caffeine_servings: u32,
    #[serde(default)]
    pub planner: Planner,
}

fn default_wake_time() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN)
}
fn default_sleep_hours() -> f64 {
    7.0
}
fn default_water_cups() -> u32 {
    5
}
fn default_caffeine_servings() -> u32 {
    1
}

impl Default for Session {
    fn default() -> Self {
        Self {
            guide: GuideCharacter::default(),
            chronotype: Chronotype::default(),
            wake_time: default_wake_time(),
            sleep_hours: default_sleep_hours(),
            water_cups: default_water_cups(),
            caffeine_servings: default_caffeine_servings(),
            planner: Planner::default(),
        }
    }
}

impl Session {
    /// Score inputs for `date`: the session's rhythm values plus the
    /// minutes completed in the planner that day.
    pub fn score_inputs_for(&self, date: NaiveDate) -> ScoreInputs {
        ScoreInputs {
            sleep_hours: self.sleep_hours,
            water_cups: self.water_cups,
            caffeine_servings: self.caffeine_servings,
            study_minutes_today: self.planner.completed_minutes_on(date),
        }
    }

    /// Brain energy index for `date`.
    pub fn energy_index_for(&self, date: NaiveDate) -> u8 {
        energy::compute_energy_index(&self.score_inputs_for(date))
    }

    /// The day's curve for this session's chronotype and wake time.
    pub fn curve(&self) -> EnergyCurve {
        EnergyCurve::generate(self.chronotype, self.wake_time)
    }

    /// Top `n` golden-time focus slots for this session.
    pub fn focus_slots(&self, n: usize) -> Vec<FocusSlot> {
        energy::top_focus_slots(&self.curve(), n)
    }
}
