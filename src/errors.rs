use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Validation failures raised while building a rent agreement.
///
/// Both variants render as their bare message so callers can show them to
/// the end user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentError {
    /// Non-positive or non-numeric amounts, unknown frequency or payment method.
    #[error("{0}")]
    InvalidInput(String),
    /// Malformed or impossible dates, or a start date after the end date.
    #[error("{0}")]
    InvalidDate(String),
}

impl RentError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RentError::InvalidInput(message.into())
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        RentError::InvalidDate(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            RentError::InvalidInput(message) | RentError::InvalidDate(message) => message,
        }
    }
}

pub type Result<T> = StdResult<T, RentError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Rent(#[from] RentError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid request file: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("{0}")]
    Usage(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_errors_display_bare_message() {
        let err = RentError::invalid_input("Amount must be a positive number");
        assert_eq!(err.to_string(), "Amount must be a positive number");
        assert_eq!(err.message(), "Amount must be a positive number");
    }

    #[test]
    fn cli_error_is_transparent_over_rent_error() {
        let err: CliError = RentError::invalid_date("Invalid rent_end_date: 'x'").into();
        assert_eq!(err.to_string(), "Invalid rent_end_date: 'x'");
    }
}
