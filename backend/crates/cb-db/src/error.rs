use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// PostgreSQL SQLSTATE for unique_violation
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "Store API error ({status}): {message} (code: {}, details: {}) {location}",
        .code.as_deref().unwrap_or("none"),
        .details.as_deref().unwrap_or("none")
    )]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected store response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid store configuration: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self::api_with_details(status, code, message, None)
    }

    /// Create an API error keeping the store's `details` apart from its message
    #[track_caller]
    pub fn api_with_details(
        status: u16,
        code: Option<String>,
        message: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        StoreError::Api {
            status,
            code,
            message: message.into(),
            details,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_response(message: impl Into<String>) -> Self {
        StoreError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        StoreError::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the store rejected a write because the row already exists.
    ///
    /// Matches SQLSTATE 23505, or an API message mentioning "duplicate"
    /// for gateways that drop the code. `details` is never inspected.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Api { code, message, .. } => {
                code.as_deref() == Some(UNIQUE_VIOLATION_CODE)
                    || message.to_lowercase().contains("duplicate")
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        StoreError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        StoreError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
