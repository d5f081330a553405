use crate::{Client, ClientError};

use async_trait::async_trait;
use guide_core::{Credentials, SignupFields, UserRecord};
use guide_session::{
    AuthBackend, AuthFailure, AuthSuccess, MSG_SIGNIN_OK, MSG_SIGNUP_OK, SessionContext,
};
use log::{info, warn};

/// Authenticates against the identity backend, then records the user in the
/// local session so every subscriber sees the sign-in.
#[derive(Clone)]
pub struct RemoteAuthBackend {
    client: Client,
    context: SessionContext,
}

impl RemoteAuthBackend {
    pub fn new(client: Client, context: SessionContext) -> Self {
        Self { client, context }
    }
}

fn failure(err: ClientError) -> AuthFailure {
    warn!("Identity backend call failed: {err}");
    AuthFailure::new(err.user_message())
}

#[async_trait]
impl AuthBackend for RemoteAuthBackend {
    async fn signup(&self, fields: &SignupFields) -> Result<AuthSuccess, AuthFailure> {
        let response = self.client.signup(fields).await.map_err(failure)?;

        let name = fields
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        let record = UserRecord::account(
            name,
            fields.email.trim().to_string(),
            fields.background_or_default(),
        );
        let user = self.context.remember(record)?;

        info!("Remote signup accepted for {}", user.id);
        Ok(AuthSuccess {
            user,
            message: response.message.unwrap_or_else(|| MSG_SIGNUP_OK.to_string()),
            redirect_url: None,
        })
    }

    async fn signin(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailure> {
        let response = self.client.signin(credentials).await.map_err(failure)?;

        let email = credentials.email.trim();
        let record = self.context.store().find_account(email).unwrap_or_else(|| {
            UserRecord::account(None, email.to_string(), Default::default())
        });
        let user = self.context.remember(record)?;

        info!("Remote sign-in accepted for {}", user.id);
        Ok(AuthSuccess {
            user,
            message: response.message.unwrap_or_else(|| MSG_SIGNIN_OK.to_string()),
            redirect_url: response.redirect_url,
        })
    }
}
