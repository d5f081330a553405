use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid background: {value} {location}")]
    InvalidBackground {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Validation error for `field` at caller location.
    #[track_caller]
    pub fn validation(field: Option<&str>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for rendering next to a form field, without location noise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidBackground { value, .. } => format!(
                "Background must be Student, Professional or Hobbyist (got '{value}')."
            ),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
