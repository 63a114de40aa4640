//! Error types for Nutri core operations.
//!
//! Every error here is a recoverable, user-facing validation failure. The
//! ledger never mutates its log on an error path; the CLI layer maps these
//! to friendly messages and hints.

use thiserror::Error;

/// Result type alias for Nutri operations.
pub type Result<T> = std::result::Result<T, NutriError>;

/// Core error type for Nutri operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NutriError {
    /// Food name was empty or whitespace-only
    #[error("Food name is empty")]
    EmptyName,

    /// Quantity was zero, negative, or not a finite number
    #[error("Invalid quantity: {0} (expected a positive number)")]
    InvalidQuantity(String),

    /// No reference entry matched (strict matching)
    #[error("Food not found: \"{name}\"")]
    FoodNotFound { name: String },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reference table could not be built
    #[error("Invalid reference table: {0}")]
    InvalidReference(String),
}

impl NutriError {
    /// Shorthand for an invalid quantity error carrying the offending value.
    pub fn invalid_quantity(value: f64) -> Self {
        NutriError::InvalidQuantity(value.to_string())
    }
}
