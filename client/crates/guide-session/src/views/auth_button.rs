use crate::Session;

use serde::Serialize;

pub const SIGNED_OUT_LABEL: &str = "Sign Up / Login";

/// Navbar button: greeting + sign-out for members, sign-up entry for guests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthButton {
    SignedIn { label: String },
    SignedOut { label: String },
}

impl AuthButton {
    pub fn render(session: &Session) -> Self {
        match session.user.as_ref() {
            Some(user) => Self::SignedIn {
                label: format!(
                    "Welcome, {}! | Mode: {}",
                    user.display_name().unwrap_or("reader"),
                    user.background
                ),
            },
            None => Self::SignedOut {
                label: SIGNED_OUT_LABEL.to_string(),
            },
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::SignedIn { label } | Self::SignedOut { label } => label,
        }
    }
}
