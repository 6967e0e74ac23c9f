//! Configuration and session persistence.

mod config;
mod session_store;

pub use config::{Config, GoalsConfig, PlannerConfig, RhythmConfig};
pub use session_store::SessionStore;

use std::path::PathBuf;

/// Returns `~/.config/studybody[-dev]/` based on STUDYBODY_ENV.
///
/// Set STUDYBODY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYBODY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studybody-dev")
    } else {
        base_dir.join("studybody")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
