//! Error codes for the order core
//!
//! Codes are organized by category so API layers and frontends can group
//! them without string matching:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Represented as `u16` on the wire for efficient serialization and
/// cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Actor is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Requested status change is not in the transition table
    InvalidStatusTransition = 4002,

    // ==================== 9xxx: System ====================
    /// Storage backend error
    StorageError = 9001,
}

impl ErrorCode {
    /// Numeric value of this code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidStatusTransition => "Invalid status transition",
            ErrorCode::StorageError => "Storage error",
        }
    }

    /// HTTP status an API layer should answer with.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Unknown | ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::ValidationFailed | ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound | ErrorCode::OrderNotFound => StatusCode::NOT_FOUND,
            ErrorCode::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ErrorCode::PermissionDenied => StatusCode::FORBIDDEN,
            ErrorCode::InvalidStatusTransition => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            1001 => Ok(ErrorCode::NotAuthenticated),
            2001 => Ok(ErrorCode::PermissionDenied),
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidStatusTransition),
            9001 => Ok(ErrorCode::StorageError),
            other => Err(format!("unknown error code: {}", other)),
        }
    }
}
