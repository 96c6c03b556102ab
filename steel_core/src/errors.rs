//! # Error Types
//!
//! Structured error types for steel_core. Errors fall into three families:
//!
//! - **Input errors** (`InvalidInput`, `MissingField`) - a field is missing or
//!   out of physical range. Raised by validation and returned to the caller.
//! - **Domain errors** (`Domain`) - a formula precondition failed mid-computation
//!   (zero radius of gyration, zero denominator in Lr, ...). The orchestrator
//!   recovers by skipping that one limit state.
//! - **Unsupported cases** (`UnsupportedCase`) - a code path that is not
//!   implemented, such as slender-flange flexure or singly symmetric FTB.
//!   Surfaced as a distinct skip reason, never approximated.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(ag_in2: f64) -> CalcResult<()> {
//!     if ag_in2 <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "section.ag".to_string(),
//!             value: ag_in2.to_string(),
//!             reason: "Gross area must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for steel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for check operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by report generators and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A formula precondition was violated during computation
    #[error("Domain error computing {quantity}: {reason}")]
    Domain { quantity: String, reason: String },

    /// The code path for this case is not implemented
    #[error("Unsupported case: {feature} - {reason}")]
    UnsupportedCase { feature: String, reason: String },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a Domain error
    pub fn domain(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Domain {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedCase error
    pub fn unsupported(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UnsupportedCase {
            feature: feature.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Input errors abort an evaluation; everything else is recoverable per limit state.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::MissingField { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::Domain { .. } => "DOMAIN_ERROR",
            CalcError::UnsupportedCase { .. } => "UNSUPPORTED_CASE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}
