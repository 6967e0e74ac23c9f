//! JSON persistence for the session document.
//!
//! The rhythm engine is stateless; the day's inputs and the task list are
//! a presentation-layer concern, and between CLI invocations they live
//! here as a single JSON document.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::SessionStoreError;
use crate::session::Session;

/// Loads and saves the session document at `session.json` in the data dir.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store in the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, SessionStoreError> {
        Ok(Self {
            path: data_dir()?.join("session.json"),
        })
    }

    /// Store at an explicit path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, or a default one when no file exists yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Session, SessionStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| SessionStoreError::LoadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Session::default()),
            Err(err) => Err(SessionStoreError::LoadFailed {
                path: self.path.clone(),
                message: err.to_string(),
            }),
        }
    }

    /// Persist the session document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized or written.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let content =
            serde_json::to_string_pretty(session).map_err(|e| SessionStoreError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content).map_err(|e| SessionStoreError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Delete the stored session; the next load returns defaults.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be removed.
    pub fn reset(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::SaveFailed {
                path: self.path.clone(),
                message: err.to_string(),
            }),
        }
    }
}
