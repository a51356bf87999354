//! Typed error surface of the order core

use super::codes::ErrorCode;
use crate::order::OrderStatus;
use http::StatusCode;
use thiserror::Error;

/// Modeled failure of an order operation.
///
/// These are expected outcomes, not exceptions: callers branch on the
/// variant to render the right user message. `InvalidRequest` ("fix your
/// input") and `Forbidden` ("you may not do this") are deliberately
/// distinct and must stay distinguishable all the way to the UI.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Operation requires an identified actor and none was supplied
    #[error("Authentication required")]
    Unauthenticated,

    /// Actor is identified but the policy denied the action
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Creation payload failed validation; carries every reason, not just
    /// the first
    #[error("Invalid order request: {}", reasons.join("; "))]
    InvalidRequest { reasons: Vec<String> },

    /// Requested status change is not in the transition table
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Referenced record does not exist (propagated from the store)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unmodeled store failure, passed through unchanged
    #[error("Storage error: {0}")]
    Storage(String),
}

impl OrderError {
    /// Structured code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::Unauthenticated => ErrorCode::NotAuthenticated,
            OrderError::Forbidden(_) => ErrorCode::PermissionDenied,
            OrderError::InvalidRequest { .. } => ErrorCode::ValidationFailed,
            OrderError::InvalidTransition { .. } => ErrorCode::InvalidStatusTransition,
            OrderError::NotFound(_) => ErrorCode::OrderNotFound,
            OrderError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// HTTP status an API layer should answer with.
    pub fn http_status(&self) -> StatusCode {
        self.code().http_status()
    }

    /// Convenience constructor for policy denials.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        OrderError::Forbidden(msg.into())
    }

    /// Convenience constructor for validation failures.
    pub fn invalid_request(reasons: Vec<String>) -> Self {
        OrderError::InvalidRequest { reasons }
    }
}

/// Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_and_forbidden_stay_distinct() {
        let invalid = OrderError::invalid_request(vec!["name required".to_string()]);
        let forbidden = OrderError::forbidden("vendors cannot purchase");

        assert_ne!(invalid.code(), forbidden.code());
        assert_eq!(invalid.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(forbidden.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_invalid_request_keeps_all_reasons() {
        let err = OrderError::invalid_request(vec![
            "order must contain at least one item".to_string(),
            "customer name is required".to_string(),
        ]);

        match &err {
            OrderError::InvalidRequest { reasons } => assert_eq!(reasons.len(), 2),
            other => panic!("unexpected error: {:?}", other),
        }
        let display = err.to_string();
        assert!(display.contains("at least one item"));
        assert!(display.contains("name is required"));
    }

    #[test]
    fn test_transition_error_display() {
        let err = OrderError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition: DELIVERED -> PENDING"
        );
    }

    #[test]
    fn test_http_status_per_variant() {
        assert_eq!(
            OrderError::Unauthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            OrderError::NotFound("order abc".to_string()).http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            OrderError::Storage("connection reset".to_string()).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
