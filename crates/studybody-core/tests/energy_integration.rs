//! Integration tests for the rhythm scoring engine.

use chrono::{Duration, NaiveTime, Timelike};
use proptest::prelude::*;

use studybody_core::{
    compute_energy_index, top_focus_slots, Chronotype, EnergyCurve, ScoreInputs, SAMPLES_PER_DAY,
    SAMPLE_STEP_HOURS,
};

fn wake(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_index_full_bonus_for_any_sleep_in_band() {
    for sleep in [7.0, 7.25, 8.0, 8.5, 9.0] {
        let inputs = ScoreInputs {
            sleep_hours: sleep,
            water_cups: 6,
            caffeine_servings: 0,
            study_minutes_today: 120,
        };
        assert_eq!(compute_energy_index(&inputs), 92);
    }
}

#[test]
fn test_index_reference_value_without_study() {
    let inputs = ScoreInputs {
        sleep_hours: 8.0,
        water_cups: 6,
        caffeine_servings: 0,
        study_minutes_today: 0,
    };
    assert_eq!(compute_energy_index(&inputs), 79);
}

#[test]
fn test_index_non_increasing_in_caffeine_beyond_two() {
    let mut prev = u8::MAX;
    for servings in 3..20 {
        let inputs = ScoreInputs {
            sleep_hours: 8.0,
            water_cups: 5,
            caffeine_servings: servings,
            study_minutes_today: 120,
        };
        let index = compute_energy_index(&inputs);
        assert!(index <= prev);
        prev = index;
    }
}

#[test]
fn test_curve_shape_for_neutral_seven_am() {
    let curve = EnergyCurve::generate(Chronotype::Neutral, wake(7, 0));
    assert_eq!(curve.points().len(), SAMPLES_PER_DAY);
    for (i, point) in curve.points().iter().enumerate() {
        assert_eq!(point.hour, i as f64 * SAMPLE_STEP_HOURS);
        assert!((0.0..=1.0).contains(&point.energy));
    }
}

#[test]
fn test_curve_generation_is_idempotent() {
    let a = EnergyCurve::generate(Chronotype::Evening, wake(8, 30));
    let b = EnergyCurve::generate(Chronotype::Evening, wake(8, 30));
    assert_eq!(a, b);
}

#[test]
fn test_top_three_slots_are_the_true_top_three() {
    let curve = EnergyCurve::generate(Chronotype::Neutral, wake(7, 0));
    let slots = top_focus_slots(&curve, 3);

    assert_eq!(slots.len(), 3);
    assert!(slots.windows(2).all(|w| w[0].start < w[1].start));

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
            assert!(
                point.energy <= min_selected,
                "unselected sample {i} beats a selected one"
            );
        }
    }

    for slot in &slots {
        assert_eq!(slot.end, slot.start + Duration::minutes(60));
    }
}

#[test]
fn test_oversized_n_returns_every_sample_once() {
    let curve = EnergyCurve::generate(Chronotype::Morning, wake(6, 0));
    let slots = top_focus_slots(&curve, 48);

    assert_eq!(slots.len(), SAMPLES_PER_DAY);
    // Strictly increasing starts imply no duplicates and no omissions.
    assert!(slots.windows(2).all(|w| w[0].start < w[1].start));
    assert_eq!(slots[0].start, wake(0, 0));
    assert_eq!(slots[47].start, wake(23, 30));
}

proptest! {
    #[test]
    fn prop_index_is_always_in_range(
        sleep in -24.0f64..48.0,
        water in 0u32..50,
        caffeine in 0u32..50,
        study in 0u32..3000,
    ) {
        let inputs = ScoreInputs {
            sleep_hours: sleep,
            water_cups: water,
            caffeine_servings: caffeine,
            study_minutes_today: study,
        };
        let index = compute_energy_index(&inputs);
        prop_assert!(index <= 100);
    }

    #[test]
    fn prop_curve_values_stay_clamped(
        h in 0u32..24,
        m in 0u32..60,
        chronotype in prop_oneof![
            Just(Chronotype::Morning),
            Just(Chronotype::Neutral),
            Just(Chronotype::Evening),
        ],
    ) {
        let curve = EnergyCurve::generate(chronotype, wake(h, m));
        prop_assert_eq!(curve.points().len(), SAMPLES_PER_DAY);
        for point in curve.points() {
            prop_assert!((0.0..=1.0).contains(&point.energy));
        }
    }

    #[test]
    fn prop_slots_are_sorted_and_hour_long(
        n in 1usize..60,
        h in 0u32..24,
    ) {
        let curve = EnergyCurve::generate(Chronotype::Neutral, wake(h, 0));
        let slots = top_focus_slots(&curve, n);
        prop_assert_eq!(slots.len(), n.min(SAMPLES_PER_DAY));
        prop_assert!(slots.windows(2).all(|w| w[0].start < w[1].start));
        for slot in &slots {
            prop_assert_eq!(slot.end, slot.start + Duration::minutes(60));
        }
    }
}
