pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::background::Background;
pub use models::credentials::Credentials;
pub use models::language_mode::LanguageMode;
pub use models::signup_fields::SignupFields;
pub use models::user_record::{CURRENT_SCHEMA_VERSION, UserRecord};
pub use validation::{DEFAULT_MIN_PASSWORD_LENGTH, FieldValidator};
