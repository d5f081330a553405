use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by key-value storage backends.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to {action} {path}: {source} {location}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Storage file corrupted at {path}: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize storage: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Storage lock poisoned {location}")]
    Poisoned { location: ErrorLocation },
}

impl StorageError {
    /// Text shown to the reader when a session write or read fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Io { .. } => {
                "Unable to access saved session data. Check disk space and file permissions."
            }
            Self::Corrupted { .. } => {
                "Saved session data is corrupted. A backup will be created and you'll need to sign up again."
            }
            Self::Serialization { .. } => {
                "Internal error preparing session data. Please report this issue."
            }
            Self::Poisoned { .. } => "Session storage is unavailable. Restart and try again.",
        }
    }

    /// `action` completes "Failed to ...", e.g. "read" or "create directory".
    #[track_caller]
    pub fn io(action: &'static str, path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn poisoned() -> Self {
        Self::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
