use error_location::ErrorLocation;
use serde_json::Value;
use std::panic::Location;
use thiserror::Error;

/// Fixed text shown whenever the backend cannot be reached or understood.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach backend. Please make sure backend is running.";

/// Errors that can occur during backend calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response was not JSON (status: {status}) {location}")]
    InvalidBody { status: u16, location: ErrorLocation },

    #[error("API error: {detail} (status: {status}) {location}")]
    Api {
        status: u16,
        detail: String,
        location: ErrorLocation,
    },

    #[error("Request failed without detail (status: {status}) {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Server validation failed: {message} (status: {status}) {location}")]
    ServerValidation {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_body(status: u16) -> Self {
        ClientError::InvalidBody {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build the error for a non-2xx response from its `detail` field.
    ///
    /// `detail` is either a string or a list of `{loc, msg}` entries; list
    /// entries are joined as `"{loc[1]}: {msg}"` with `"; "`.
    #[track_caller]
    pub fn from_detail(status: u16, detail: Option<&Value>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match detail {
            Some(Value::String(detail)) => ClientError::Api {
                status,
                detail: detail.clone(),
                location,
            },
            Some(Value::Array(entries)) => ClientError::ServerValidation {
                status,
                message: entries
                    .iter()
                    .map(describe_validation_entry)
                    .collect::<Vec<_>>()
                    .join("; "),
                location,
            },
            _ => ClientError::Status { status, location },
        }
    }

    /// Text a form or chat window renders for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { detail, .. } => detail.clone(),
            ClientError::Status { status, .. } => format!("Request failed with status: {status}."),
            ClientError::ServerValidation { message, .. } => message.clone(),
            ClientError::Http { .. }
            | ClientError::InvalidBody { .. }
            | ClientError::Json { .. } => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the backend answered at all.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ClientError::Http { .. } | ClientError::InvalidBody { .. } | ClientError::Json { .. }
        )
    }
}

fn describe_validation_entry(entry: &Value) -> String {
    let msg = entry
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or("Invalid value");

    let field = entry
        .get("loc")
        .and_then(Value::as_array)
        .filter(|loc| loc.len() > 1)
        .and_then(|loc| loc.get(1))
        .map(|field| match field {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

    match field {
        Some(field) => format!("{field}: {msg}"),
        None => msg.to_string(),
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
