//! Read-side consumers. Each one renders from a [`Session`](crate::Session)
//! snapshot and never writes.

pub(crate) mod auth_button;
pub(crate) mod conditional_content;
pub(crate) mod language_toggle;
pub(crate) mod signup_prompt;
pub(crate) mod welcome_banner;

pub use auth_button::AuthButton;
pub use conditional_content::{ConditionalContent, ContentKind};
pub use language_toggle::LanguageToggle;
pub use signup_prompt::SignupPrompt;
pub use welcome_banner::WelcomeBanner;
