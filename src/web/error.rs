//! API error handling for the board API.
//!
//! Every error reaches the client as the same object,
//! `{"error": "an error has occurred"}`. The status code is chosen from the
//! error code here; the router may later flatten it to 200 (see
//! [`compat_error_status`]).

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::BoardError;

/// Message carried by every error object.
pub const GENERIC_ERROR_MESSAGE: &str = "an error has occurred";

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad request (400): missing or malformed input.
    BadRequest,
    /// Not found (404): thread or reply ID does not resolve.
    NotFound,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always "an error has occurred".
    #[schema(example = "an error has occurred")]
    pub error: String,
}

/// Marks a response as an error object, so status rewriting can find it.
#[derive(Debug, Clone, Copy)]
pub struct ErrorObject;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error. `message` is logged, never sent.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a bad request error from validator::ValidationErrors.
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        Self::bad_request(format!("invalid fields: {}", fields.join(", ")))
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(code = ?self.code, message = %self.message, "Request failed");
        let body = ErrorBody {
            error: GENERIC_ERROR_MESSAGE.to_string(),
        };
        let mut response = (self.code.status_code(), Json(body)).into_response();
        response.extensions_mut().insert(ErrorObject);
        response
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match &err {
            BoardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            BoardError::Validation(msg) => ApiError::bad_request(msg.clone()),
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal(err.to_string())
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(format!("Invalid path: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(format!("Invalid query: {}", rejection.body_text()))
    }
}

/// Send error objects with status 200.
///
/// Used as a response mapper when the `compat` error style is configured.
pub async fn compat_error_status(mut response: Response) -> Response {
    if response.extensions().get::<ErrorObject>().is_some() {
        *response.status_mut() = StatusCode::OK;
    }
    response
}
