//! TOML-based application configuration.
//!
//! Stores defaults the CLI applies to fresh sessions:
//! - Daily study goal
//! - Rhythm defaults (chronotype, wake time, slot count)
//! - Planner defaults
//!
//! Configuration is stored at `~/.config/studybody/config.toml`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::energy::Chronotype;
use crate::error::ConfigError;

/// Daily goal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default = "default_daily_target")]
    pub daily_target_minutes: u32,
}

/// Rhythm defaults applied to fresh sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhythmConfig {
    #[serde(default)]
    pub chronotype: Chronotype,
    /// Wake time as HH:MM.
    #[serde(default = "default_wake_time")]
    pub wake_time: String,
    /// How many golden-time slots to suggest.
    #[serde(default = "default_slot_count")]
    pub slot_count: u32,
}

/// Planner defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_planned_minutes")]
    pub default_planned_minutes: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studybody/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub goals: GoalsConfig,
    #[serde(default)]
    pub rhythm: RhythmConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

// Default functions
fn default_daily_target() -> u32 {
    240
}
fn default_wake_time() -> String {
    "07:00".to_string()
}
fn default_slot_count() -> u32 {
    3
}
fn default_planned_minutes() -> u32 {
    40
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            daily_target_minutes: default_daily_target(),
        }
    }
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self {
            chronotype: Chronotype::default(),
            wake_time: default_wake_time(),
            slot_count: default_slot_count(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_planned_minutes: default_planned_minutes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goals: GoalsConfig::default(),
            rhythm: RhythmConfig::default(),
            planner: PlannerConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| ConfigError::InvalidValue {
                                    key: key.to_string(),
                                    message: format!("cannot parse '{value}' as number"),
                                })?
                        } else {
                            return Err(ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("cannot parse '{value}' as number"),
                            });
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing and returning the default when no file
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Mutates in memory only;
    /// call [`Config::save`] to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed as the existing value's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Parsed wake time; falls back to 07:00 when the stored string is
    /// malformed.
    pub fn wake_time(&self) -> NaiveTime {
        NaiveTime::parse_from_str(&self.rhythm.wake_time, "%H:%M")
            .unwrap_or_else(|_| NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}
