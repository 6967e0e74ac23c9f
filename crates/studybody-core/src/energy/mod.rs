//! Rhythm scoring engine.
//!
//! Pure functions over in-memory values: a 0-100 brain energy index from
//! four daily inputs, a synthetic half-hour energy curve from chronotype
//! and wake time, and golden-time slot selection over that curve. Nothing
//! is held between calls; the day's inputs belong to the surrounding
//! session, not to this module.

mod curve;
mod index;
mod slots;

pub use curve::{Chronotype, CurvePoint, EnergyCurve, SAMPLES_PER_DAY, SAMPLE_STEP_HOURS};
pub use index::{compute_energy_index, EnergyBand, ScoreInputs};
pub use slots::{top_focus_slots, FocusSlot, SLOT_MINUTES};
