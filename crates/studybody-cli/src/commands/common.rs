//! Shared helpers for CLI commands.

use chrono::{Local, NaiveDate, NaiveTime};

/// Parse a YYYY-MM-DD date argument, defaulting to today.
pub fn parse_date(arg: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD").into()),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse an HH:MM time argument.
pub fn parse_time(s: &str) -> Result<NaiveTime, Box<dyn std::error::Error>> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| format!("invalid time '{s}', expected HH:MM").into())
}
