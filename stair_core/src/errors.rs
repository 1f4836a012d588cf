//! # Error Types
//!
//! Structured error types for stair_core. The engine can fail in exactly two
//! ways - a numeric input outside its configured bounds, or a step material
//! code that is not one of the recognized variants - and both are detected
//! before any geometry is derived.
//!
//! Errors serialize with a `type` discriminator so transport layers can map
//! them to client-visible statuses without string matching.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::errors::{StairError, StairResult};
//!
//! fn validate_width(width_mm: f64) -> StairResult<()> {
//!     if width_mm < 600.0 || width_mm > 2000.0 {
//!         return Err(StairError::out_of_range("width_mm", width_mm, 600.0, 2000.0));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stair_core operations
pub type StairResult<T> = Result<T, StairError>;

/// Structured error type for BOM derivation.
///
/// A failed call has no partial result; the computation is deterministic and
/// side-effect-free, so callers simply retry with corrected input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StairError {
    /// A numeric input violates a configured bound
    #[error("Value for '{field}' out of range: {value} (allowed {min} to {max})")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The step material is not one of the recognized variants
    #[error("Unsupported step material: '{material}'")]
    UnsupportedMaterial { material: String },
}

impl StairError {
    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        StairError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create an UnsupportedMaterial error
    pub fn unsupported_material(material: impl Into<String>) -> Self {
        StairError::UnsupportedMaterial {
            material: material.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StairError::OutOfRange { .. } => "OUT_OF_RANGE",
            StairError::UnsupportedMaterial { .. } => "UNSUPPORTED_MATERIAL",
        }
    }

    /// The input field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            StairError::OutOfRange { field, .. } => Some(field),
            StairError::UnsupportedMaterial { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = StairError::out_of_range("width_mm", 100.0, 600.0, 2000.0);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: StairError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StairError::out_of_range("height_mm", 0.0, 100.0, 3000.0).error_code(),
            "OUT_OF_RANGE"
        );
        assert_eq!(
            StairError::unsupported_material("plywood").error_code(),
            "UNSUPPORTED_MATERIAL"
        );
    }

    #[test]
    fn test_message_names_field() {
        let error = StairError::out_of_range("width_mm", 599.0, 600.0, 2000.0);
        let message = error.to_string();
        assert!(message.contains("width_mm"));
        assert!(message.contains("599"));
        assert_eq!(error.field(), Some("width_mm"));
    }
}
