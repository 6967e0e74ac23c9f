//! Pomodoro phase math.
//!
//! Wall-clock based with no internal threads: the caller supplies the
//! elapsed time (or timestamps) and gets back a snapshot of where the
//! focus/break cadence stands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Focus,
    Break,
}

impl StepType {
    pub fn label(&self) -> &'static str {
        match self {
            StepType::Focus => "focus",
            StepType::Break => "break",
        }
    }
}

/// A focus/break cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroPlan {
    /// Focus phase length in minutes.
    pub focus_min: u32,
    /// Break phase length in minutes.
    pub break_min: u32,
    /// Rounds shown before the displayed round stops advancing.
    pub rounds: u32,
}

impl Default for PomodoroPlan {
    fn default() -> Self {
        Self {
            focus_min: 25,
            break_min: 5,
            rounds: 4,
        }
    }
}

impl PomodoroPlan {
    /// One focus phase in seconds.
    pub fn focus_secs(&self) -> u64 {
        u64::from(self.focus_min).saturating_mul(60)
    }

    /// One full focus+break cycle in seconds.
    pub fn cycle_secs(&self) -> u64 {
        (u64::from(self.focus_min) + u64::from(self.break_min)).saturating_mul(60)
    }
}

/// Where the timer stands after some elapsed wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSnapshot {
    pub step: StepType,
    /// 1-based round, capped at the plan's round count for display.
    pub round: u32,
    /// Seconds left in the current phase.
    pub remaining_secs: u64,
}

impl PhaseSnapshot {
    /// Remaining time as `MM:SS`.
    pub fn remaining_clock(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }
}

/// Compute the phase at an elapsed offset.
///
/// The cadence repeats indefinitely; `rounds` only caps the displayed
/// round number. A plan with zero-length phases pins the snapshot to the
/// start of round one.
pub fn phase_at(plan: &PomodoroPlan, elapsed_secs: u64) -> PhaseSnapshot {
    let cycle = plan.cycle_secs();
    if cycle == 0 {
        return PhaseSnapshot {
            step: StepType::Focus,
            round: plan.rounds.min(1),
            remaining_secs: 0,
        };
    }

    let round = ((elapsed_secs / cycle) + 1).min(u64::from(plan.rounds.max(1))) as u32;
    let within = elapsed_secs % cycle;
    let focus_secs = plan.focus_secs();

    let (step, remaining_secs) = if within < focus_secs {
        (StepType::Focus, focus_secs - within)
    } else {
        (StepType::Break, cycle - within)
    };

    PhaseSnapshot {
        step,
        round,
        remaining_secs,
    }
}

/// Snapshot against wall-clock timestamps.
///
/// A `now` before `started_at` counts as zero elapsed time.
pub fn snapshot(plan: &PomodoroPlan, started_at: DateTime<Utc>, now: DateTime<Utc>) -> PhaseSnapshot {
    let elapsed = (now - started_at).num_seconds().max(0) as u64;
    phase_at(plan, elapsed)
}
