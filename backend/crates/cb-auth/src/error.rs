use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const PROFILE_NOT_FOUND_MESSAGE: &str = "User profile not found. Please contact administrator.";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Profile not found for user {user_id} {location}")]
    ProfileNotFound {
        user_id: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn profile_not_found(user_id: impl Into<String>) -> Self {
        Self::ProfileNotFound {
            user_id: user_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ProfileNotFound { .. } => "profile_not_found",
        }
    }

    /// Message safe to show the signed-in user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ProfileNotFound { .. } => PROFILE_NOT_FOUND_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
