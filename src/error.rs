//! Error types for the Ohmflow engine.
//!
//! The engine operations themselves are total and never fail. [`OhmError`]
//! covers the edges around them: parsing user input, validating
//! configuration, and CLI I/O.

use thiserror::Error;

/// Result type alias using [`OhmError`].
pub type Result<T> = std::result::Result<T, OhmError>;

/// Unified error type for all Ohmflow operations.
#[derive(Error, Debug)]
pub enum OhmError {
    // ============ Input Errors ============
    /// A numeric value could not be parsed
    #[error("Invalid numeric value '{input}'")]
    InvalidValue { input: String },

    /// Unknown state store key
    #[error("Unknown state key '{key}' (expected U, R, prev_U or prev_R)")]
    UnknownKey { key: String },

    /// Malformed interaction event line
    #[error("Event error at line {line}: {message}")]
    EventParse { line: usize, message: String },

    // ============ Configuration Errors ============
    /// Configuration that would break engine output invariants
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ============ I/O Errors ============
    /// Error reading interaction events
    #[error("Input error: {message}")]
    InputReadError { message: String },

    /// Error writing reports
    #[error("Output error: {message}")]
    OutputWriteError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl OhmError {
    /// Create an invalid value error
    pub fn invalid_value(input: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
        }
    }

    /// Create an event parse error
    pub fn event(line: usize, message: impl Into<String>) -> Self {
        Self::EventParse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OhmError::event(3, "expected a value after 'U='");
        assert_eq!(
            err.to_string(),
            "Event error at line 3: expected a value after 'U='"
        );

        let err = OhmError::UnknownKey { key: "I".to_string() };
        assert!(err.to_string().contains("'I'"));
    }
}
