//! Error types for the AC TECH lead-capture library.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-field validation failures are not errors; see [`crate::validation::FieldErrors`].

use thiserror::Error;

/// Errors that can occur when delivering a submission to the form relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Transport-level failure (DNS, connection refused, TLS, ...)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Relay answered with an error status code
    #[error("Relay error (status {status})")]
    StatusError { status: u16 },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Payload could not be encoded
    #[error("Payload encoding failed: {0}")]
    EncodingError(String),

    /// The background task running the blocking call failed
    #[error("Task join error: {0}")]
    TaskError(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by form shells when addressing forms or fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The draft has no field with this name
    #[error("Unknown field '{field}' for {form} form")]
    UnknownField { form: &'static str, field: String },

    /// No form is registered under this name
    #[error("Unknown form: {0}")]
    UnknownForm(String),
}

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
