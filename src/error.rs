//! Error types for forecast table construction and configuration
//!
//! Lookups never fail: a missing date is `None`. These errors only come
//! from building or loading a table and from reading configuration.

use thiserror::Error;

/// Main error type for the forecast lookup crate
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Table contents violate an invariant (e.g. a repeated date key)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A table document could not be parsed
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ForecastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            ForecastError::Validation { message } => format!("Invalid input: {message}"),
            ForecastError::Parse { .. } => {
                "Forecast table could not be read. Expected a JSON object of date to forecast."
                    .to_string()
            }
            ForecastError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::parse(err.to_string())
    }
}
