//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Lookup errors
    ConditionNotFound,
    NodeNotFound,
    SymptomNotFound,

    // Interaction errors
    UnknownChoice,
    InvalidState,

    // Infrastructure errors
    LogError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::ConditionNotFound => "CONDITION_NOT_FOUND",
            ErrorCode::NodeNotFound => "NODE_NOT_FOUND",
            ErrorCode::SymptomNotFound => "SYMPTOM_NOT_FOUND",
            ErrorCode::UnknownChoice => "UNKNOWN_CHOICE",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::LogError => "LOG_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates an `UnknownChoice` error for a choice outside the declared set.
    ///
    /// Recoverable: the caller should re-prompt with the declared choices.
    pub fn unknown_choice(choice: impl Into<String>, declared: &[String]) -> Self {
        Self::new(
            ErrorCode::UnknownChoice,
            "Choice is not in the declared option set",
        )
        .with_detail("choice", choice.into())
        .with_detail("declared", declared.join(", "))
    }

    /// Creates an `InvalidState` error reporting the current session phase.
    pub fn invalid_state(operation: impl Into<String>, phase: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidState,
            "Operation invoked in wrong session state",
        )
        .with_detail("operation", operation.into())
        .with_detail("phase", phase.to_string())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        Self::new(code, err.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("condition_key");
        assert_eq!(format!("{}", err), "Field 'condition_key' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("likelihood", 0, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'likelihood' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NodeNotFound, "Node not found");
        assert_eq!(format!("{}", err), "[NODE_NOT_FOUND] Node not found");
    }

    #[test]
    fn unknown_choice_carries_declared_set() {
        let declared = vec!["Yes".to_string(), "No".to_string()];
        let err = DomainError::unknown_choice("Maybe", &declared);
        assert_eq!(err.code, ErrorCode::UnknownChoice);
        assert_eq!(err.details.get("choice"), Some(&"Maybe".to_string()));
        assert_eq!(err.details.get("declared"), Some(&"Yes, No".to_string()));
    }

    #[test]
    fn invalid_state_reports_phase() {
        let err = DomainError::invalid_state("submit", "Complete");
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert_eq!(err.details.get("phase"), Some(&"Complete".to_string()));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "criteria")
            .with_detail("reason", "empty positive set");

        assert_eq!(err.details.get("field"), Some(&"criteria".to_string()));
        assert_eq!(
            err.details.get("reason"),
            Some(&"empty positive set".to_string())
        );
    }
}
