//! # Error Types
//!
//! Structured error types for shed_core. Every failure is a synchronous
//! validation rejection: the engine does no I/O, so nothing here is
//! retryable. Errors serialize to JSON so the surrounding application can
//! prompt the user (e.g. re-select a template on `UnknownStyle`).
//!
//! ## Example
//!
//! ```rust
//! use shed_core::errors::{ShedError, ShedResult};
//!
//! fn validate_width(width_ft: f64) -> ShedResult<()> {
//!     if width_ft <= 0.0 {
//!         return Err(ShedError::invalid_dimension("width_ft", width_ft));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-2.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shed_core operations
pub type ShedResult<T> = Result<T, ShedError>;

/// Structured error type for design and estimate operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShedError {
    /// A width, depth or height is zero or negative
    #[error("Invalid dimension for '{field}': {value} - must be greater than zero")]
    InvalidDimension { field: String, value: String },

    /// The requested building style is not a supported archetype
    #[error("Unknown style: '{style}'")]
    UnknownStyle { style: String },

    /// An input value is unusable for another reason (NaN, out of range, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ShedError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: f64) -> Self {
        ShedError::InvalidDimension {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create an UnknownStyle error
    pub fn unknown_style(style: impl Into<String>) -> Self {
        ShedError::UnknownStyle {
            style: style.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ShedError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShedError::InvalidDimension { .. } => "INVALID_DIMENSION",
            ShedError::UnknownStyle { .. } => "UNKNOWN_STYLE",
            ShedError::InvalidInput { .. } => "INVALID_INPUT",
            ShedError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for ShedError {
    fn from(err: serde_json::Error) -> Self {
        ShedError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject non-positive or non-finite building dimensions.
///
/// Shared by the geometry generator and the quantity estimator so both
/// paths fail identically before producing any output.
pub(crate) fn check_dimension(field: &str, value: f64) -> ShedResult<()> {
    if !value.is_finite() {
        return Err(ShedError::invalid_input(field, value.to_string(), "Must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ShedError::invalid_dimension(field, value));
    }
    Ok(())
}

/// Reject NaN/infinite pitch. Any finite pitch is accepted unclamped.
pub(crate) fn check_pitch(pitch: f64) -> ShedResult<()> {
    if !pitch.is_finite() {
        return Err(ShedError::invalid_input("pitch", pitch.to_string(), "Must be a finite number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ShedError::invalid_dimension("width_ft", 0.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidDimension"));
        let roundtrip: ShedError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ShedError::unknown_style("Nomad Mobile").error_code(), "UNKNOWN_STYLE");
        assert_eq!(ShedError::invalid_dimension("depth_ft", -1.0).error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_check_dimension() {
        assert!(check_dimension("width_ft", 10.0).is_ok());
        assert!(matches!(
            check_dimension("width_ft", 0.0),
            Err(ShedError::InvalidDimension { .. })
        ));
        assert!(matches!(
            check_dimension("width_ft", f64::NAN),
            Err(ShedError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_pitch_is_unbounded() {
        assert!(check_pitch(0.5).is_ok());
        assert!(check_pitch(24.0).is_ok());
        assert!(check_pitch(f64::INFINITY).is_err());
    }
}
