//! Synthetic daily energy curve.
//!
//! The curve is a decorative circadian model driving the suggested-slot
//! feature, not a fit to measured data.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of samples in a daily curve (one per half hour).
pub const SAMPLES_PER_DAY: usize = 48;

/// Spacing between samples in hours.
pub const SAMPLE_STEP_HOURS: f64 = 0.5;

/// A user's self-reported circadian preference.
///
/// Affects only the position of the synthetic curve's peaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Chronotype {
    Morning,
    Evening,
    #[default]
    Neutral,
}

impl Chronotype {
    /// Hours the primary peak moves relative to a neutral rhythm.
    pub fn peak_shift(&self) -> f64 {
        match self {
            Chronotype::Morning => -1.0,
            Chronotype::Neutral => 0.0,
            Chronotype::Evening => 2.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Chronotype::Morning => "morning",
            Chronotype::Evening => "evening",
            Chronotype::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Chronotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Chronotype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Chronotype::Morning),
            "evening" => Ok(Chronotype::Evening),
            "neutral" => Ok(Chronotype::Neutral),
            other => Err(format!(
                "unknown chronotype '{other}', expected morning/evening/neutral"
            )),
        }
    }
}

/// One sampled point of a daily curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Hour of day in [0, 24).
    pub hour: f64,
    /// Normalized energy in [0, 1].
    pub energy: f64,
}

impl CurvePoint {
    /// Clock time of this sample.
    pub fn time_of_day(&self) -> NaiveTime {
        let hour = self.hour.rem_euclid(24.0);
        let h = (hour as u32).min(23);
        let m = (((hour - f64::from(h)) * 60.0) as u32).min(59);
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// A one-day energy curve at half-hour resolution.
///
/// Always 48 samples spanning [0, 24); regenerated on demand from
/// (chronotype, wake time) and never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyCurve {
    points: Vec<CurvePoint>,
}

impl EnergyCurve {
    /// Generate the synthetic curve for a chronotype and wake time.
    ///
    /// Two Gaussian bumps over a 0.55 baseline: a primary peak 3.5 hours
    /// after waking (shifted by chronotype) and a secondary peak 7.5 hours
    /// after the primary. Peak centres are deliberately not wrapped modulo
    /// 24 -- with extreme wake times a nominal centre can fall outside the
    /// sampled day, and only its tail contributes in range.
    pub fn generate(chronotype: Chronotype, wake: NaiveTime) -> Self {
        let wake_hour = f64::from(wake.hour()) + f64::from(wake.minute()) / 60.0;
        let primary_peak = wake_hour + 3.5 + chronotype.peak_shift();
        let secondary_peak = primary_peak + 7.5;

        let points = (0..SAMPLES_PER_DAY)
            .map(|i| {
                let x = i as f64 * SAMPLE_STEP_HOURS;
                let energy = 0.55
                    + 0.30 * gaussian(x, primary_peak, 1.6)
                    + 0.20 * gaussian(x, secondary_peak, 2.2);
                CurvePoint {
                    hour: x,
                    energy: energy.clamp(0.0, 1.0),
                }
            })
            .collect();

        Self { points }
    }

    #[cfg(test)]
    pub(crate) fn from_points(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// The sample with the highest energy value.
    pub fn peak(&self) -> Option<&CurvePoint> {
        self.points.iter().max_by(|a, b| {
            a.energy
                .partial_cmp(&b.energy)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Render the curve as an ASCII chart, one row per half hour.
    pub fn render_ascii_chart(&self) -> String {
        let mut output = String::from("\nDaily Energy Curve:\n");
        output.push_str(&"─".repeat(46));
        output.push('\n');

        for point in &self.points {
            let bar_length = (point.energy * 30.0) as usize;
            let bar = "█".repeat(bar_length);
            let empty = " ".repeat(30 - bar_length);
            output.push_str(&format!(
                "{} {}{} {:.0}%\n",
                point.time_of_day().format("%H:%M"),
                bar,
                empty,
                point.energy * 100.0
            ));
        }

        output.push_str(&"─".repeat(46));
        output.push('\n');
        output
    }
}

fn gaussian(x: f64, center: f64, sigma: f64) -> f64 {
    (-0.5 * ((x - center) / sigma).powi(2)).exp()
}
