//! Energy index, curve, and golden-time slot commands.

use clap::Subcommand;

use studybody_core::{
    compute_energy_index, top_focus_slots, Chronotype, Config, EnergyBand, EnergyCurve,
    SessionStore,
};

use super::common;

#[derive(Subcommand)]
pub enum EnergyAction {
    /// Compute the brain energy index
    Index {
        /// Hours slept (overrides the stored session)
        #[arg(long)]
        sleep: Option<f64>,
        /// Cups of water today
        #[arg(long)]
        water: Option<u32>,
        /// Caffeine servings today
        #[arg(long)]
        caffeine: Option<u32>,
        /// Date for completed study minutes (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the synthetic daily energy curve
    Curve {
        /// Chronotype (morning/evening/neutral, overrides the session)
        #[arg(long)]
        chronotype: Option<String>,
        /// Wake time (HH:MM, overrides the session)
        #[arg(long)]
        wake: Option<String>,
    },
    /// Suggest golden-time focus slots
    Slots {
        /// Number of slots (default from config)
        #[arg(long)]
        count: Option<usize>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EnergyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EnergyAction::Index {
            sleep,
            water,
            caffeine,
            date,
            json,
        } => show_index(sleep, water, caffeine, date, json),
        EnergyAction::Curve { chronotype, wake } => show_curve(chronotype, wake),
        EnergyAction::Slots { count, json } => show_slots(count, json),
    }
}

fn show_index(
    sleep: Option<f64>,
    water: Option<u32>,
    caffeine: Option<u32>,
    date: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let mut session = store.load()?;

    if let Some(sleep) = sleep {
        session.sleep_hours = sleep;
    }
    if let Some(water) = water {
        session.water_cups = water;
    }
    if let Some(caffeine) = caffeine {
        session.caffeine_servings = caffeine;
    }

    let date = common::parse_date(date.as_deref())?;
    let inputs = session.score_inputs_for(date);
    let index = compute_energy_index(&inputs);
    let band = EnergyBand::from_index(index);

    if json {
        let payload = serde_json::json!({
            "date": date,
            "index": index,
            "band": band.label(),
            "inputs": inputs,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Brain energy index: {index} / 100 ({})", band.label());
        println!(
            "  sleep {:.1} h | water {} cups | caffeine {} servings | studied {} min",
            inputs.sleep_hours,
            inputs.water_cups,
            inputs.caffeine_servings,
            inputs.study_minutes_today
        );
    }
    Ok(())
}

fn show_curve(
    chronotype: Option<String>,
    wake: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let session = store.load()?;

    let chronotype = match chronotype {
        Some(s) => s.parse::<Chronotype>()?,
        None => session.chronotype,
    };
    let wake = match wake {
        Some(s) => common::parse_time(&s)?,
        None => session.wake_time,
    };

    let curve = EnergyCurve::generate(chronotype, wake);
    println!("{}", curve.render_ascii_chart());
    println!(
        "Chronotype: {} | wake {}",
        chronotype,
        wake.format("%H:%M")
    );
    if let Some(peak) = curve.peak() {
        println!(
            "Peak: {} at {:.0}% energy",
            peak.time_of_day().format("%H:%M"),
            peak.energy * 100.0
        );
    }
    Ok(())
}

fn show_slots(count: Option<usize>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let session = store.load()?;
    let config = Config::load()?;

    let count = count.unwrap_or(config.rhythm.slot_count as usize);
    let slots = top_focus_slots(&session.curve(), count);

    if json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    println!("Golden-time focus slots:");
    for slot in slots {
        println!(
            "  {} - {}  expected focus {:.0}%",
            slot.start.format("%H:%M"),
            slot.end.format("%H:%M"),
            slot.predicted_energy * 100.0
        );
    }
    Ok(())
}
