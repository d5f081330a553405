pub mod background;
pub mod credentials;
pub mod language_mode;
pub mod signup_fields;
pub mod user_record;
