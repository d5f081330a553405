//! Client-side identity and session handling for the guide site widgets.
//!
//! A [`SessionStore`] persists the current user in a [`KeyValueStore`];
//! a [`SessionContext`] wraps it and publishes every change to subscribers,
//! so banners, buttons and conditional blocks re-render without a reload.

pub mod context;
pub mod error;
pub mod form;
pub mod session;
pub mod storage;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use context::{SessionContext, SessionWatcher};
pub use error::{Result as SessionResult, SessionError};
pub use form::{
    AuthBackend, AuthFailure, AuthForm, AuthFormBuilder, AuthSuccess, FormMode, FormState,
    LocalAuthBackend, MSG_SIGNIN_OK, MSG_SIGNUP_OK,
};
pub use session::Session;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
pub use store::SessionStore;
pub use views::{
    AuthButton, ConditionalContent, ContentKind, LanguageToggle, SignupPrompt, WelcomeBanner,
};
