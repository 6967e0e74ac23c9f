//! # Study&Body Core Library
//!
//! This library provides the core logic for the Study&Body study planner:
//! a pure rhythm scoring engine, explicit session state with a task
//! planner, closed-enumeration guidance catalogs, and pomodoro phase math.
//! It implements a CLI-first philosophy where every operation is available
//! via a standalone CLI binary that is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Rhythm engine**: stateless functions computing a 0-100 brain energy
//!   index, a synthetic half-hour daily energy curve, and golden-time
//!   focus slots
//! - **Session**: an explicit state struct threaded through calls -- the
//!   engine itself holds nothing between evaluations
//! - **Storage**: TOML-based configuration and a JSON session document
//! - **Guidance**: fixed mappings from MBTI types and subjects to careers,
//!   tips, and flashcard decks
//!
//! ## Key Components
//!
//! - [`energy`]: the rhythm scoring engine
//! - [`Session`]: session-scoped inputs and the study planner
//! - [`Planner`]: the task list with per-date progress queries
//! - [`Config`] / [`SessionStore`]: persistence owned by the presentation layer

pub mod energy;
pub mod error;
pub mod guidance;
pub mod planner;
pub mod report;
pub mod session;
pub mod storage;
pub mod timer;

pub use energy::{
    compute_energy_index, top_focus_slots, Chronotype, CurvePoint, EnergyBand, EnergyCurve,
    FocusSlot, ScoreInputs, SAMPLES_PER_DAY, SAMPLE_STEP_HOURS,
};
pub use error::{ConfigError, CoreError, SessionStoreError, ValidationError};
pub use guidance::{career_recommendations, study_tips, Flashcard, Mbti};
pub use planner::{DailyProgress, Planner, StudyTask, Subject};
pub use report::{DailyReport, DistributionRow, GoalProgress, SubjectDistribution};
pub use session::{GuideCharacter, Session};
pub use storage::{data_dir, Config, SessionStore};
pub use timer::{phase_at, PhaseSnapshot, PomodoroPlan, StepType};
