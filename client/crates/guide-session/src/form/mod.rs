pub(crate) mod auth_backend;
pub(crate) mod auth_form;
pub(crate) mod local_backend;

pub use auth_backend::{AuthBackend, AuthFailure, AuthSuccess};
pub use auth_form::{AuthForm, AuthFormBuilder, FormMode, FormState, SuccessCallback};
pub use local_backend::{LocalAuthBackend, MSG_SIGNIN_OK, MSG_SIGNUP_OK};
