//! Client-side field checks shared by every signup and sign-in path.
//!
//! Checks run in a fixed order: required fields, email format, password length.
//! The first failure wins and its message is rendered verbatim by the forms.

use crate::{CoreError, CoreResult, Credentials, SignupFields};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const MSG_REQUIRED: &str = "Email and password are required.";
pub const MSG_INVALID_EMAIL: &str = "Email format is invalid.";
pub const MSG_NAME_REQUIRED: &str = "Name is required.";

#[derive(Debug, Clone, Copy)]
pub struct FieldValidator {
    min_password_length: usize,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}

impl FieldValidator {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    /// Required fields only. Sign-in never checks format or length.
    #[track_caller]
    pub fn validate_credentials(&self, credentials: &Credentials) -> CoreResult<()> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(CoreError::validation(None, MSG_REQUIRED));
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_signup(&self, fields: &SignupFields) -> CoreResult<()> {
        self.validate_credentials(&fields.credentials())?;

        if !is_valid_email(&fields.email) {
            return Err(CoreError::validation(Some("email"), MSG_INVALID_EMAIL));
        }

        if fields.password.chars().count() < self.min_password_length {
            return Err(CoreError::validation(
                Some("password"),
                format!(
                    "Password must be at least {} characters.",
                    self.min_password_length
                ),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_profile_name(&self, name: &str) -> CoreResult<()> {
        if name.trim().is_empty() {
            return Err(CoreError::validation(Some("name"), MSG_NAME_REQUIRED));
        }
        Ok(())
    }
}

/// `local@domain.tld` shape: something, `@`, something, `.`, something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    // The earliest usable '@' leaves the most room for a dotted domain.
    let Some(at) = email.char_indices().skip(1).find(|&(_, c)| c == '@').map(|(i, _)| i) else {
        return false;
    };

    let domain = &email[at + 1..];
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
