use crate::SessionError;

use async_trait::async_trait;
use guide_core::{Credentials, SignupFields, UserRecord};
use serde::Serialize;
use thiserror::Error;

/// Where a form sends its submission.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn signup(&self, fields: &SignupFields) -> Result<AuthSuccess, AuthFailure>;

    async fn signin(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthSuccess {
    pub user: UserRecord,
    pub message: String,
    /// Page the backend asked to continue to after sign-in
    pub redirect_url: Option<String>,
}

/// A failure already phrased for the reader.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<SessionError> for AuthFailure {
    fn from(err: SessionError) -> Self {
        Self::new(err.user_message())
    }
}
