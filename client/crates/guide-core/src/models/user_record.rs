//! The persisted identity record.

use crate::Background;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Locally stored user. Never carries a password.
///
/// Records written by older widgets only had `name` and `background`,
/// so every other field has a serde default: nil id, epoch timestamp,
/// schema version 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub schema_version: u32,
}

impl UserRecord {
    /// Create an account record keyed by `email`.
    pub fn account(name: Option<String>, email: String, background: Background) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: Some(email),
            background,
            created_at: Utc::now(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Create a profile-only record (no account, no email).
    pub fn profile(name: String, background: Background) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name),
            email: None,
            background,
            created_at: Utc::now(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Name to greet the user with: name, else email.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
    }

    /// Whether this record belongs to `email` (case-insensitive, trimmed).
    pub fn has_email(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|own| normalize_email(own) == normalize_email(email))
    }
}

/// Canonical form used for account lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
