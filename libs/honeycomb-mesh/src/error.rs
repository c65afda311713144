//! # Mesh Errors
//!
//! Error types for honeycomb mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A grid or builder parameter fell outside its accepted range
    #[error("invalid parameter `{field}`: {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    /// Mesh validation failed
    #[error("validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates an invalid parameter error naming the offending field.
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Creates a validation failure error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_field() {
        let err = MeshError::invalid_parameter("rows", "must be at least 2: 1");
        assert!(err.to_string().contains("rows"));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_validation_failed_message() {
        let err = MeshError::validation_failed("face index out of bounds");
        assert!(err.to_string().contains("out of bounds"));
    }
}
