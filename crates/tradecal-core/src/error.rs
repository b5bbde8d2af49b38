//! Error types for tradecal.
//!
//! Every fallible operation in the crate returns [`TradeCalResult`]. Errors
//! are bad input, a bounded search that gave up, or a holiday-table
//! configuration problem.

use thiserror::Error;

/// A specialized Result type for calendar operations.
pub type TradeCalResult<T> = Result<T, TradeCalError>;

/// The main error type for calendar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeCalError {
    /// Malformed date string, unknown weekday name or out-of-range component.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the bad input.
        message: String,
    },

    /// A bounded search finished without producing a result.
    #[error("Not found: {what} (gave up after {steps} steps)")]
    NotFound {
        /// What was being searched for.
        what: String,
        /// Number of steps attempted.
        steps: u32,
    },

    /// Holiday-table configuration could not be read or is inconsistent.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl TradeCalError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid input error for a date string.
    #[must_use]
    pub fn invalid_date(input: &str) -> Self {
        Self::invalid_input(format!("'{input}' is not a valid YYYYMMDD date"))
    }

    /// Creates an invalid input error for a weekday name.
    #[must_use]
    pub fn invalid_weekday(input: &str) -> Self {
        Self::invalid_input(format!("'{input}' is not a weekday name"))
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>, steps: u32) -> Self {
        Self::NotFound {
            what: what.into(),
            steps,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by malformed input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns true if the error is a bounded search giving up.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
