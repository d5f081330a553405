//! The one signup/sign-in form controller.
//!
//! Field checks run before the backend is touched; a backend failure is shown
//! verbatim; success runs the caller's `on_success` action.

use crate::{AuthBackend, AuthSuccess};

use guide_core::{FieldValidator, SignupFields};
use log::debug;
use serde::Serialize;

pub type SuccessCallback = Box<dyn Fn(&AuthSuccess) + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Signup,
    SignIn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    /// Local check failed; nothing was sent or stored
    FieldError(String),
    /// Backend rejected the submission
    Error(String),
    Success(String),
}

impl FormState {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::FieldError(m) | Self::Error(m) | Self::Success(m) => Some(m),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

pub struct AuthForm<B: AuthBackend> {
    backend: B,
    mode: FormMode,
    validator: FieldValidator,
    state: FormState,
    last_success: Option<AuthSuccess>,
    on_success: Option<SuccessCallback>,
}

impl<B: AuthBackend> AuthForm<B> {
    pub fn builder(backend: B) -> AuthFormBuilder<B> {
        AuthFormBuilder {
            backend,
            mode: FormMode::default(),
            validator: FieldValidator::default(),
            on_success: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn last_success(&self) -> Option<&AuthSuccess> {
        self.last_success.as_ref()
    }

    /// Switch between the sign-up and sign-in sub-views, clearing feedback.
    pub fn switch_mode(&mut self, mode: FormMode) {
        self.mode = mode;
        self.state = FormState::Idle;
        self.last_success = None;
    }

    /// Submit the form. `fields.name` and `fields.background` are ignored in sign-in mode.
    pub async fn submit(&mut self, fields: SignupFields) -> &FormState {
        self.last_success = None;

        let checked = match self.mode {
            FormMode::Signup => self.validator.validate_signup(&fields),
            FormMode::SignIn => self.validator.validate_credentials(&fields.credentials()),
        };
        if let Err(e) = checked {
            debug!("Form rejected locally: {e}");
            self.state = FormState::FieldError(e.user_message());
            return &self.state;
        }

        self.state = FormState::Submitting;

        let result = match self.mode {
            FormMode::Signup => self.backend.signup(&fields).await,
            FormMode::SignIn => self.backend.signin(&fields.credentials()).await,
        };

        self.state = match result {
            Ok(success) => {
                if let Some(callback) = &self.on_success {
                    callback(&success);
                }
                let state = FormState::Success(success.message.clone());
                self.last_success = Some(success);
                state
            }
            Err(failure) => FormState::Error(failure.message),
        };

        &self.state
    }
}

pub struct AuthFormBuilder<B: AuthBackend> {
    backend: B,
    mode: FormMode,
    validator: FieldValidator,
    on_success: Option<SuccessCallback>,
}

impl<B: AuthBackend> AuthFormBuilder<B> {
    pub fn mode(mut self, mode: FormMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validator(mut self, validator: FieldValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Post-success action: close a modal, switch views, navigate...
    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(&AuthSuccess) + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> AuthForm<B> {
        AuthForm {
            backend: self.backend,
            mode: self.mode,
            validator: self.validator,
            state: FormState::Idle,
            last_success: None,
            on_success: self.on_success,
        }
    }
}
