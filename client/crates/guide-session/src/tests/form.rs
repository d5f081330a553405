use crate::tests::{memory_context, valid_signup};
use crate::{
    AuthBackend, AuthFailure, AuthForm, AuthSuccess, FormMode, FormState, LocalAuthBackend,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use guide_core::{Background, Credentials, FieldValidator, SignupFields, UserRecord};
use googletest::assert_that;
use googletest::prelude::{anything, eq, none, some};

/// Backend that counts calls and answers with a fixed result.
#[derive(Clone, Default)]
struct CountingBackend {
    calls: Arc<AtomicUsize>,
    fail_with: Option<String>,
}

#[async_trait]
impl AuthBackend for CountingBackend {
    async fn signup(&self, fields: &SignupFields) -> Result<AuthSuccess, AuthFailure> {
        self.answer(&fields.email)
    }

    async fn signin(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailure> {
        self.answer(&credentials.email)
    }
}

impl CountingBackend {
    fn answer(&self, email: &str) -> Result<AuthSuccess, AuthFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(AuthFailure::new(message.clone())),
            None => Ok(AuthSuccess {
                user: UserRecord::account(None, email.to_string(), Background::Student),
                message: "ok".into(),
                redirect_url: Some("/docs/intro".into()),
            }),
        }
    }
}

#[tokio::test]
async fn given_missing_fields_when_submit_then_field_error_and_backend_not_called() {
    // Given
    let backend = CountingBackend::default();
    let calls = backend.calls.clone();
    let mut form = AuthForm::builder(backend).build();

    // When
    let state = form.submit(SignupFields::new("", "")).await.clone();

    // Then
    assert_eq!(
        state,
        FormState::FieldError("Email and password are required.".into())
    );
    assert_that!(calls.load(Ordering::SeqCst), eq(0));
}

#[tokio::test]
async fn given_bad_email_when_submit_signup_then_field_error_without_backend() {
    let backend = CountingBackend::default();
    let calls = backend.calls.clone();
    let mut form = AuthForm::builder(backend).build();

    let state = form
        .submit(SignupFields::new("bad-email", "longenough1"))
        .await
        .clone();

    assert_eq!(state, FormState::FieldError("Email format is invalid.".into()));
    assert_that!(calls.load(Ordering::SeqCst), eq(0));
}

#[tokio::test]
async fn given_short_password_when_submit_signin_then_backend_called() {
    let backend = CountingBackend::default();
    let calls = backend.calls.clone();
    let mut form = AuthForm::builder(backend).mode(FormMode::SignIn).build();

    let state = form.submit(SignupFields::new("a@b.com", "short")).await.clone();

    assert!(state.is_success());
    assert_that!(calls.load(Ordering::SeqCst), eq(1));
}

#[tokio::test]
async fn given_backend_failure_when_submit_then_error_rendered_verbatim() {
    let backend = CountingBackend {
        fail_with: Some("email: value is not a valid email address".into()),
        ..Default::default()
    };
    let mut form = AuthForm::builder(backend).build();

    let state = form
        .submit(SignupFields::new("a@b.com", "longenough1"))
        .await
        .clone();

    assert_eq!(
        state,
        FormState::Error("email: value is not a valid email address".into())
    );
    assert_that!(form.last_success(), none());
}

#[tokio::test]
async fn given_success_when_submit_then_on_success_runs_once() {
    // Given
    let closed = Arc::new(AtomicUsize::new(0));
    let closed_by_callback = closed.clone();
    let mut form = AuthForm::builder(CountingBackend::default())
        .on_success(move |success| {
            assert_eq!(success.redirect_url.as_deref(), Some("/docs/intro"));
            closed_by_callback.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    // When
    let state = form
        .submit(SignupFields::new("a@b.com", "longenough1"))
        .await
        .clone();

    // Then
    assert_eq!(state, FormState::Success("ok".into()));
    assert_that!(closed.load(Ordering::SeqCst), eq(1));
    assert_that!(form.last_success(), some(anything()));
}

#[tokio::test]
async fn given_custom_validator_when_submit_then_uses_its_minimum() {
    let mut form = AuthForm::builder(CountingBackend::default())
        .validator(FieldValidator::new(16))
        .build();

    let state = form
        .submit(SignupFields::new("a@b.com", "longenough1"))
        .await
        .clone();

    assert_eq!(
        state.message(),
        Some("Password must be at least 16 characters.")
    );
}

#[tokio::test]
async fn given_error_state_when_switch_mode_then_reset() {
    let mut form = AuthForm::builder(CountingBackend::default()).build();
    form.submit(SignupFields::new("", "")).await;

    form.switch_mode(FormMode::SignIn);

    assert_eq!(form.mode(), FormMode::SignIn);
    assert_eq!(form.state(), &FormState::Idle);
}

// =========================================================================
// Local backend
// =========================================================================

#[tokio::test]
async fn given_local_backend_when_signup_twice_then_duplicate_message() {
    // Given
    let context = memory_context();
    let mut form = AuthForm::builder(LocalAuthBackend::new(context.clone())).build();
    form.submit(valid_signup("a@b.com", Background::Student))
        .await;

    // When
    let state = form
        .submit(valid_signup("a@b.com", Background::Student))
        .await
        .clone();

    // Then
    assert_eq!(
        state,
        FormState::Error("An account with this email already exists.".into())
    );
}

#[tokio::test]
async fn given_local_backend_when_signin_unknown_then_not_found_message() {
    let context = memory_context();
    let mut form = AuthForm::builder(LocalAuthBackend::new(context))
        .mode(FormMode::SignIn)
        .build();

    let state = form
        .submit(SignupFields::new("ghost@b.com", "longenough1"))
        .await
        .clone();

    assert_eq!(
        state,
        FormState::Error("Account not found. Please sign up first.".into())
    );
}

#[tokio::test]
async fn given_local_backend_when_signup_then_context_subscribers_updated() {
    let context = memory_context();
    let watcher = context.subscribe();
    let mut form = AuthForm::builder(LocalAuthBackend::new(context.clone())).build();

    let state = form
        .submit(valid_signup("a@b.com", Background::Hobbyist))
        .await
        .clone();

    assert!(state.is_success());
    assert!(watcher.has_changed());
    assert_that!(watcher.current().background(), some(eq(Background::Hobbyist)));
}
