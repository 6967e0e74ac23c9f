//! Daily report command.

use studybody_core::{Config, DailyReport, GuideCharacter, SessionStore, SubjectDistribution};

use super::common;

pub fn run(date: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let session = store.load()?;
    let config = Config::load()?;

    let date = common::parse_date(date.as_deref())?;
    let report = DailyReport::build(&session, date, config.goals.daily_target_minutes);
    let distribution = SubjectDistribution::from_planner(&session.planner);

    if json {
        let payload = serde_json::json!({
            "report": report,
            "distribution": distribution,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Report for {}", report.date);
    println!("  Studied today: {} min", report.studied_minutes);
    println!(
        "  Brain energy index: {} / 100 ({})",
        report.energy_index,
        report.band.label()
    );
    println!("  Sleep: {:.1} h", report.sleep_hours);
    println!(
        "  Daily goal: {}/{} min ({}%)",
        report.goal.completed_minutes, report.goal.target_minutes, report.goal.percent
    );

    if distribution.is_empty() {
        println!("\nNo tasks planned yet. Add one with `plan add`.");
    } else {
        println!("\nSubject distribution (planned minutes):");
        for row in &distribution.rows {
            println!("  {}  {:<10} {:>4} min", row.date, row.subject.label(), row.minutes);
        }
    }

    let guide = GuideCharacter::for_report(report.energy_index);
    println!("\nGuide: {} ({})", guide, guide.tag());
    Ok(())
}
