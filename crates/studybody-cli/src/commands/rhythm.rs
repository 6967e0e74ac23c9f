//! Rhythm input commands: chronotype, wake time, and daily habits.

use clap::Subcommand;

use studybody_core::{Chronotype, GuideCharacter, SessionStore};

use super::common;

#[derive(Subcommand)]
pub enum RhythmAction {
    /// Update rhythm inputs
    Set {
        /// Chronotype (morning/evening/neutral)
        #[arg(long)]
        chronotype: Option<String>,
        /// Wake time (HH:MM)
        #[arg(long)]
        wake: Option<String>,
        /// Hours slept
        #[arg(long)]
        sleep: Option<f64>,
        /// Cups of water per day
        #[arg(long)]
        water: Option<u32>,
        /// Caffeine servings per day
        #[arg(long)]
        caffeine: Option<u32>,
        /// Guide character (neuron/atp-monster/dna-fairy)
        #[arg(long)]
        guide: Option<String>,
    },
    /// Show current rhythm inputs
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset the session document to defaults
    Reset,
}

pub fn run(action: RhythmAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;

    match action {
        RhythmAction::Set {
            chronotype,
            wake,
            sleep,
            water,
            caffeine,
            guide,
        } => {
            let mut session = store.load()?;

            if let Some(s) = chronotype {
                session.chronotype = s.parse::<Chronotype>()?;
            }
            if let Some(s) = wake {
                session.wake_time = common::parse_time(&s)?;
            }
            if let Some(sleep) = sleep {
                session.sleep_hours = sleep;
            }
            if let Some(water) = water {
                session.water_cups = water;
            }
            if let Some(caffeine) = caffeine {
                session.caffeine_servings = caffeine;
            }
            if let Some(s) = guide {
                session.guide = s.parse::<GuideCharacter>()?;
            }

            store.save(&session)?;
            println!("ok");
        }
        RhythmAction::Show { json } => {
            let session = store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                println!("Guide:      {} ({})", session.guide, session.guide.tag());
                println!("Chronotype: {}", session.chronotype);
                println!("Wake time:  {}", session.wake_time.format("%H:%M"));
                println!("Sleep:      {:.1} h", session.sleep_hours);
                println!("Water:      {} cups", session.water_cups);
                println!("Caffeine:   {} servings", session.caffeine_servings);
                println!("Tasks:      {}", session.planner.len());
            }
        }
        RhythmAction::Reset => {
            store.reset()?;
            println!("session reset to defaults");
        }
    }
    Ok(())
}
