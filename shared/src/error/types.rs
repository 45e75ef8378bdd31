//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the workspace, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid format error for a tag that failed to parse
    pub fn invalid_format(kind: &str, value: impl Into<String>) -> Self {
        let v = value.into();
        Self::with_message(ErrorCode::InvalidFormat, format!("unknown {kind} tag: {v}"))
            .with_detail("value", v)
    }

    /// Create an order not found error
    pub fn order_not_found(order_id: impl Into<String>) -> Self {
        let id = order_id.into();
        Self::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
            .with_detail("order_id", id)
    }

    /// Create an editor state error
    pub fn editor_state(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidEditorState, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }

    /// Returns true when the error carries the given code
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NoOrderOpen);
        assert_eq!(err.code, ErrorCode::NoOrderOpen);
        assert_eq!(err.message, "No order is open");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("bad range")
            .with_detail("field", "amount_range")
            .with_detail("reason", "inverted");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "amount_range");
        assert_eq!(details.get("reason").unwrap(), "inverted");
    }

    #[test]
    fn test_convenience_constructors() {
        let err = AppError::order_not_found("42");
        assert!(err.is(ErrorCode::OrderNotFound));
        assert_eq!(err.message, "Order 42 not found");
        assert!(err.details.as_ref().unwrap().contains_key("order_id"));

        let err = AppError::invalid_format("platform", "ebay");
        assert!(err.is(ErrorCode::InvalidFormat));
        assert_eq!(err.message, "unknown platform tag: ebay");

        assert!(AppError::config("x").is(ErrorCode::ConfigError));
        assert!(AppError::editor_state("x").is(ErrorCode::InvalidEditorState));
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::OrderNotFound, "Order 7 not found");
        assert_eq!(format!("{}", err), "Order 7 not found");
    }

    #[test]
    fn test_from_code() {
        let err: AppError = ErrorCode::BatchActionUnavailable.into();
        assert_eq!(err.message, "Batch action is not available");
    }
}
