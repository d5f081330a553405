use crate::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use guide_core::CoreError;
use thiserror::Error;

pub const MSG_DUPLICATE_ACCOUNT: &str = "An account with this email already exists.";
pub const MSG_ACCOUNT_NOT_FOUND: &str = "Account not found. Please sign up first.";

/// Errors surfaced by session operations. All are local and synchronous.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{source}")]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("Duplicate account for {email} {location}")]
    DuplicateAccount {
        email: String,
        location: ErrorLocation,
    },

    #[error("Account not found for {email} {location}")]
    AccountNotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Stored value under '{key}' is corrupted: {message} {location}")]
    Corrupted {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid content kind: '{value}' {location}")]
    InvalidContentKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },

    #[error("Failed to serialize session data: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn duplicate_account(email: impl Into<String>) -> Self {
        Self::DuplicateAccount {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_not_found(email: impl Into<String>) -> Self {
        Self::AccountNotFound {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted(key: &'static str, message: impl Into<String>) -> Self {
        Self::Corrupted {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_content_kind(value: impl Into<String>) -> Self {
        Self::InvalidContentKind {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text a form renders verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source } => source.user_message(),
            Self::DuplicateAccount { .. } => MSG_DUPLICATE_ACCOUNT.to_string(),
            Self::AccountNotFound { .. } => MSG_ACCOUNT_NOT_FOUND.to_string(),
            Self::Corrupted { .. } => {
                "Saved session data is corrupted. Please sign up again.".to_string()
            }
            Self::InvalidContentKind { value, .. } => {
                format!("Unknown content kind '{value}'. Use refresher or deep-dive.")
            }
            Self::Storage { source } => source.user_message().to_string(),
            Self::Serialization { .. } => {
                "Internal error preparing session data. Please report this issue.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
