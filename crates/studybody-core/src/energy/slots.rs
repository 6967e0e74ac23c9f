//! Golden-time focus slot selection.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use super::curve::EnergyCurve;

/// Length of a suggested focus window in minutes.
pub const SLOT_MINUTES: i64 = 60;

/// A suggested one-hour focus window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusSlot {
    /// Window start, aligned to a curve sample.
    pub start: NaiveTime,
    /// Window end, exactly 60 minutes after start. Computed with calendar
    /// arithmetic, so a late-night slot wraps past midnight.
    pub end: NaiveTime,
    /// Sampled energy at the window start, rounded to two decimals.
    pub predicted_energy: f64,
}

/// Select the `n` highest-energy samples of `curve` as focus slots,
/// ordered by ascending start time.
///
/// Order among equal energy values is unspecified. When `n` is at least
/// the number of samples, every sample becomes a slot.
pub fn top_focus_slots(curve: &EnergyCurve, n: usize) -> Vec<FocusSlot> {
    let points = curve.points();

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .energy
            .partial_cmp(&points[b].energy)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let keep = n.min(points.len());
    let mut selected = order[points.len() - keep..].to_vec();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|i| {
            let start = points[i].time_of_day();
            FocusSlot {
                start,
                end: start + Duration::minutes(SLOT_MINUTES),
                predicted_energy: (points[i].energy * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::curve::{Chronotype, CurvePoint, SAMPLES_PER_DAY, SAMPLE_STEP_HOURS};
    use chrono::Timelike;

    fn sample_curve() -> EnergyCurve {
        let wake = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        EnergyCurve::generate(Chronotype::Neutral, wake)
    }

    #[test]
    fn test_top_three_sorted_by_start() {
        let slots = top_focus_slots(&sample_curve(), 3);
        assert_eq!(slots.len(), 3);
        assert!(slots.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn test_slots_are_one_hour() {
        for slot in top_focus_slots(&sample_curve(), 3) {
            assert_eq!(slot.end, slot.start + Duration::minutes(60));
        }
    }

    #[test]
    fn test_selected_dominate_unselected() {
        let curve = sample_curve();
        let slots = top_focus_slots(&curve, 3);

        let selected: Vec<usize> = slots
            .iter()
            .map(|s| (s.start.hour() * 2 + s.start.minute() / 30) as usize)
            .collect();
        let min_selected = selected
            .iter()
            .map(|&i| curve.points()[i].energy)
            .fold(f64::INFINITY, f64::min);

        for (i, point) in curve.points().iter().enumerate() {
            if !selected.contains(&i) {
                assert!(point.energy <= min_selected);
            }
        }
    }

    #[test]
    fn test_oversized_n_returns_all_points() {
        for n in [SAMPLES_PER_DAY, 100] {
            let slots = top_focus_slots(&sample_curve(), n);
            assert_eq!(slots.len(), SAMPLES_PER_DAY);
            assert!(slots.windows(2).all(|w| w[0].start < w[1].start));
        }
    }

    #[test]
    fn test_zero_n_returns_nothing() {
        assert!(top_focus_slots(&sample_curve(), 0).is_empty());
    }

    #[test]
    fn test_late_slot_wraps_past_midnight() {
        let mut points: Vec<CurvePoint> = (0..SAMPLES_PER_DAY)
            .map(|i| CurvePoint {
                hour: i as f64 * SAMPLE_STEP_HOURS,
                energy: 0.1,
            })
            .collect();
        points[47].energy = 0.9; // 23:30
        let curve = EnergyCurve::from_points(points);

        let slots = top_focus_slots(&curve, 1);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, NaiveTime::from_hms_opt(23, 30, 0).unwrap());
        assert_eq!(slots[0].end, NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn test_predicted_energy_rounded_to_two_decimals() {
        let curve = sample_curve();
        for slot in top_focus_slots(&curve, 5) {
            let scaled = slot.predicted_energy * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }
}
