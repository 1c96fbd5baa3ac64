use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: cb_config::ConfigError,
    },

    #[error("Profile store error: {source}")]
    Store {
        #[source]
        source: cb_db::StoreError,
    },

    #[error("Invalid input: {source}")]
    Input {
        #[source]
        source: cb_core::CoreError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub(crate) fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<cb_config::ConfigError> for CliError {
    fn from(source: cb_config::ConfigError) -> Self {
        Self::Config { source }
    }
}

impl From<cb_db::StoreError> for CliError {
    fn from(source: cb_db::StoreError) -> Self {
        Self::Store { source }
    }
}

impl From<cb_core::CoreError> for CliError {
    fn from(source: cb_core::CoreError) -> Self {
        Self::Input { source }
    }
}

pub(crate) type Result<T> = std::result::Result<T, CliError>;
