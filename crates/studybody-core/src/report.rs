//! Daily report read-models.
//!
//! Derived views over session state: the report page's metric tiles and
//! the planned-minutes distribution by date and subject.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::energy::{compute_energy_index, EnergyBand};
use crate::planner::{Planner, Subject};
use crate::session::Session;

/// Progress toward the configured daily study goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub completed_minutes: u32,
    pub target_minutes: u32,
    /// Completed share of the target, capped at 100.
    pub percent: u32,
}

impl GoalProgress {
    pub fn new(completed_minutes: u32, target_minutes: u32) -> Self {
        let percent = if target_minutes == 0 {
            0
        } else {
            (completed_minutes * 100 / target_minutes).min(100)
        };
        Self {
            completed_minutes,
            target_minutes,
            percent,
        }
    }
}

/// One day at a glance: studied minutes, energy index, sleep, goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub studied_minutes: u32,
    pub energy_index: u8,
    pub band: EnergyBand,
    pub sleep_hours: f64,
    pub goal: GoalProgress,
}

impl DailyReport {
    /// Assemble the report for `date` from session state and the daily
    /// goal in minutes.
    pub fn build(session: &Session, date: NaiveDate, target_minutes: u32) -> Self {
        let studied = session.planner.completed_minutes_on(date);
        let index = compute_energy_index(&session.score_inputs_for(date));
        Self {
            date,
            studied_minutes: studied,
            energy_index: index,
            band: EnergyBand::from_index(index),
            sleep_hours: session.sleep_hours,
            goal: GoalProgress::new(studied, target_minutes),
        }
    }
}

/// One row of the planned-minutes distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub date: NaiveDate,
    pub subject: Subject,
    pub minutes: u32,
}

/// Minutes planned per (date, subject), ordered by date then subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDistribution {
    pub rows: Vec<DistributionRow>,
}

impl SubjectDistribution {
    pub fn from_planner(planner: &Planner) -> Self {
        let mut by_key: BTreeMap<(NaiveDate, Subject), u32> = BTreeMap::new();
        for task in planner.tasks() {
            *by_key.entry((task.date, task.subject)).or_insert(0) += task.planned_minutes;
        }

        Self {
            rows: by_key
                .into_iter()
                .map(|((date, subject), minutes)| DistributionRow {
                    date,
                    subject,
                    minutes,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
