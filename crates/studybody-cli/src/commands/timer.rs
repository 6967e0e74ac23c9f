//! Pomodoro phase preview.

use clap::Subcommand;

use studybody_core::{phase_at, PomodoroPlan};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Show where the cadence stands at an elapsed offset
    Preview {
        /// Focus minutes per round
        #[arg(long, default_value_t = 25)]
        focus: u32,
        /// Break minutes per round
        #[arg(long = "break", default_value_t = 5)]
        break_min: u32,
        /// Number of rounds shown
        #[arg(long, default_value_t = 4)]
        rounds: u32,
        /// Elapsed minutes since the timer started
        #[arg(long)]
        elapsed: u64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Preview {
            focus,
            break_min,
            rounds,
            elapsed,
            json,
        } => {
            let plan = PomodoroPlan {
                focus_min: focus,
                break_min,
                rounds,
            };
            let snapshot = phase_at(&plan, elapsed.saturating_mul(60));

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!(
                    "Phase: {} | round {}/{} | {} remaining",
                    snapshot.step.label(),
                    snapshot.round,
                    plan.rounds,
                    snapshot.remaining_clock()
                );
            }
        }
    }
    Ok(())
}
