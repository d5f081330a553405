use guide_core::{Background, UserRecord};

use serde::Serialize;

/// Snapshot of the session that consumers render from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: Option<UserRecord>,
    pub has_skipped: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Presence of a user record is the only signed-in signal.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn background(&self) -> Option<Background> {
        self.user.as_ref().map(|u| u.background)
    }

    /// The "please sign up" prompt shows for guests who never dismissed it.
    pub fn should_show_prompt(&self) -> bool {
        !self.is_signed_in() && !self.has_skipped
    }
}
