use crate::{AuthBackend, AuthFailure, AuthSuccess, SessionContext};

use async_trait::async_trait;
use guide_core::{Credentials, SignupFields};

pub const MSG_SIGNUP_OK: &str = "User created successfully!";
pub const MSG_SIGNIN_OK: &str = "Signed in successfully.";

/// Signs up and in against the local session store only.
#[derive(Clone)]
pub struct LocalAuthBackend {
    context: SessionContext,
}

impl LocalAuthBackend {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }
}

#[async_trait]
impl AuthBackend for LocalAuthBackend {
    async fn signup(&self, fields: &SignupFields) -> Result<AuthSuccess, AuthFailure> {
        let user = self.context.signup(fields.clone())?;
        Ok(AuthSuccess {
            user,
            message: MSG_SIGNUP_OK.to_string(),
            redirect_url: None,
        })
    }

    async fn signin(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailure> {
        let user = self.context.login(credentials.clone())?;
        Ok(AuthSuccess {
            user,
            message: MSG_SIGNIN_OK.to_string(),
            redirect_url: None,
        })
    }
}
