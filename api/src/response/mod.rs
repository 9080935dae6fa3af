use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON body for all error responses:
/// ```json
/// { "error": "Duplicate entry", "details": "This email is already registered. Please log in instead." }
/// ```
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error taxonomy for the request-handler layer.
///
/// Every failure is terminal for its request: it is logged once, mapped to an
/// HTTP status and an [`ErrorBody`], and never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// The unique email index rejected a registration.
    #[error("This email is already registered. Please log in instead.")]
    DuplicateEmail,

    /// No token, invalid/expired token, or bad password.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but lacking the required role.
    #[error("{0}")]
    Forbidden(String),

    /// Missing entity by id.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected store or infrastructure failure.
    #[error("{context}: {details}")]
    Internal { context: String, details: String },
}

impl ApiError {
    pub fn internal(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Internal {
            context: context.into(),
            details: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Duplicate entry".to_string(),
                    details: Some(
                        "This email is already registered. Please log in instead.".to_string(),
                    ),
                },
            ),
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::Internal { context, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: context,
                    details: Some(details),
                },
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %body.error, details = ?body.details, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %body.error, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}
