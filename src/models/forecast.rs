//! Forecast value model

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A forecast stored against a date.
///
/// Treated as an opaque descriptor: two forecasts are equal when their
/// descriptors are equal, nothing else about the contents is interpreted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Forecast(String);

impl Forecast {
    /// Create a new forecast from its descriptor
    #[must_use]
    pub fn new<S: Into<String>>(descriptor: S) -> Self {
        Self(descriptor.into())
    }

    /// The descriptor text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Forecast {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Forecast {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
