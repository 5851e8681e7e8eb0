//! API error types with HTTP status code mapping.

use log::error;
use serde::Serialize;
use wordle_core::ServiceError;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Error codes that map to HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid request (400)
    BadRequest,
    /// Unknown route (404)
    NotFound,
    /// Server-side fault (500)
    Internal,
}

impl ErrorCode {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// API error with code and client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Client errors keep their message. Server-side detail can describe
/// stored answers, so it stays in the logs and the body is generic.
impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        if value.is_client_error() {
            Self::bad_request(value.to_string())
        } else {
            error!("event=api_error module=api status=error error={value}");
            Self::internal(INTERNAL_ERROR_MESSAGE)
        }
    }
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    pub code: String,
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
