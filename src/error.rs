//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure a shortener operation can report is one of the variants of
//! [`AppError`]. Handlers return it directly; [`IntoResponse`] turns it into a
//! JSON body of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short URL not found", "details": { "shortcode": "abc" } } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by the shortener service and HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed URL, shortcode or validity. Never retried.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// Caller-supplied shortcode already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Shortcode absent from the store.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Shortcode present but past its expiry (redirect only).
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// Random code generation gave up after its attempt budget.
    #[error("{message}")]
    ExhaustedCodeSpace { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn exhausted_code_space(message: impl Into<String>, details: Value) -> Self {
        Self::ExhaustedCodeSpace {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Expired { .. } => StatusCode::GONE,
            AppError::ExhaustedCodeSpace { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::InvalidInput { message, details } => ("invalid_input", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Expired { message, details } => ("expired", message, details),
            AppError::ExhaustedCodeSpace { message, details } => {
                ("code_space_exhausted", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_input(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::invalid_input("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::expired("x", json!({})).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::exhausted_code_space("x", json!({})).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::internal("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_carries_details() {
        let err = AppError::not_found("Short URL not found", json!({ "shortcode": "abc" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Short URL not found");
        assert_eq!(info.details["shortcode"], "abc");
        assert_eq!(err.to_string(), "Short URL not found");
    }

    #[test]
    fn test_expired_is_distinct_from_not_found() {
        let expired = AppError::expired("Short URL expired", json!({})).to_error_info();
        let missing = AppError::not_found("Short URL not found", json!({})).to_error_info();

        assert_ne!(expired.code, missing.code);
    }
}
