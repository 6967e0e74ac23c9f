//! Brain energy index heuristic.

use serde::{Deserialize, Serialize};

/// Inputs for one energy index evaluation.
///
/// Constructed fresh per evaluation; nothing is retained between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    /// Hours slept last night.
    pub sleep_hours: f64,
    /// Cups of water drunk today.
    pub water_cups: u32,
    /// Caffeinated drinks today.
    pub caffeine_servings: u32,
    /// Minutes of study already completed today.
    pub study_minutes_today: u32,
}

impl Default for ScoreInputs {
    fn default() -> Self {
        Self {
            sleep_hours: 7.0,
            water_cups: 5,
            caffeine_servings: 1,
            study_minutes_today: 0,
        }
    }
}

/// Coarse display band for the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyBand {
    /// Below 40.
    Low,
    /// 40 to 69.
    Moderate,
    /// 70 and above.
    High,
}

impl EnergyBand {
    pub fn from_index(index: u8) -> Self {
        match index {
            0..=39 => EnergyBand::Low,
            40..=69 => EnergyBand::Moderate,
            _ => EnergyBand::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergyBand::Low => "low",
            EnergyBand::Moderate => "moderate",
            EnergyBand::High => "high",
        }
    }
}

/// Compute the 0-100 brain energy index.
///
/// A simple additive heuristic, not a validated physiological metric.
/// Total over all finite inputs: the result is clamped to [0, 100] and
/// rounded to the nearest integer, and no input combination can panic or
/// divide by zero. Non-finite inputs are a contract violation the caller
/// must prevent; they still produce a clamped value rather than a crash.
pub fn compute_energy_index(inputs: &ScoreInputs) -> u8 {
    let mut score = 50.0;

    // Sleep: the 7-9h band earns the full bonus; outside it the penalty
    // grows with distance from 8h.
    let sleep = inputs.sleep_hours;
    if (7.0..=9.0).contains(&sleep) {
        score += 20.0;
    } else {
        score -= 10.0 * (8.0 - sleep).abs() / 2.0;
    }

    // Hydration.
    if inputs.water_cups >= 6 {
        score += 10.0;
    } else if inputs.water_cups <= 2 {
        score -= 8.0;
    }

    // Caffeine: a small bonus up to two servings, a growing penalty beyond.
    match inputs.caffeine_servings {
        0 => score += 4.0,
        1 | 2 => score += 2.0,
        n => score -= 6.0 * f64::from(n - 2),
    }

    // Study time: both too little and too much cost points.
    let study = inputs.study_minutes_today;
    if study < 30 || study > 360 {
        score -= 5.0;
    } else {
        score += (f64::from(study) / 30.0 * 2.0).min(12.0);
    }

    score.clamp(0.0, 100.0).round() as u8
}
