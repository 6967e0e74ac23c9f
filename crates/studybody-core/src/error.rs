//! Core error types for studybody-core.
//!
//! The rhythm engine itself is total and never fails; errors exist for
//! configuration and session-document I/O and for planner input
//! validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studybody-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session document errors
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be prepared
    #[error("Failed to prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),
}

/// Session document errors.
#[derive(Error, Debug)]
pub enum SessionStoreError {
    /// Failed to load the session document
    #[error("Failed to load session from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the session document
    #[error("Failed to save session to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Data directory could not be prepared
    #[error("Failed to prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Task topic is empty after trimming
    #[error("Task topic must not be blank")]
    EmptyTopic,

    /// Planned minutes outside the accepted range
    #[error("Planned minutes must be at least 1, got {minutes}")]
    InvalidMinutes { minutes: u32 },

    /// No task with the given id
    #[error("No task with id '{0}'")]
    TaskNotFound(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
