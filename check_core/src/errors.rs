//! # Error Types
//!
//! Structured error types for check_core. A rejected submission is always a
//! single aggregated [`CheckError::ValidationFailed`] so callers can render
//! one generic "fill in all fields" notice; the remaining variants cover the
//! typed API and the persistence layer.
//!
//! ## Example
//!
//! ```rust
//! use check_core::errors::{CheckError, CheckResult};
//!
//! fn validate_quantity(quantity: f64) -> CheckResult<()> {
//!     if !quantity.is_finite() || quantity < 0.0 {
//!         return Err(CheckError::invalid_input(
//!             "quantity",
//!             quantity.to_string(),
//!             "Quantity must be a finite number >= 0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for check_core operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Structured error type for load-check operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by whatever front end sits on top of the engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CheckError {
    /// A submission was rejected; `fields` lists every offending input
    #[error("Submission rejected: fill in all fields (invalid: {})", fields.join(", "))]
    ValidationFailed { fields: Vec<String> },

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the catalog
    #[error("Material not found: {name}")]
    MaterialNotFound { name: String },

    /// Cache-slot I/O error
    #[error("Store error: {operation} on '{path}' - {reason}")]
    StoreError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CheckError {
    /// Create a ValidationFailed error from the offending field names
    pub fn validation_failed(fields: Vec<String>) -> Self {
        CheckError::ValidationFailed { fields }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(name: impl Into<String>) -> Self {
        CheckError::MaterialNotFound { name: name.into() }
    }

    /// Create a StoreError
    pub fn store_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckError::StoreError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a rejected-input error, recoverable by redisplaying
    /// the form
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CheckError::ValidationFailed { .. }
                | CheckError::InvalidInput { .. }
                | CheckError::MaterialNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CheckError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CheckError::InvalidInput { .. } => "INVALID_INPUT",
            CheckError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CheckError::StoreError { .. } => "STORE_ERROR",
            CheckError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
