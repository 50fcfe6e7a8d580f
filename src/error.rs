//! Lookup failures and their user-facing messages

use crate::config::ConfigError;

/// Every way a lookup can fail. `Display` is the text shown in the error line.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("Type in a city first.")]
    EmptyInput,
    #[error("That city doesn't exist. Try again.")]
    CityNotFound,
    /// Transport or decoding failure; the detail is only logged
    #[error("Couldn't fetch data. Check your connection.")]
    Network(String),
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl LookupError {
    /// Diagnostic detail that is not part of the user-facing message
    pub fn detail(&self) -> Option<&str> {
        match self {
            LookupError::Network(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Network(e.to_string())
    }
}
