//! Unified error handling for the HTTP services.
//!
//! Every handler returns [`AppResult`]; the error side renders as a
//! `{"message": "..."}` JSON body with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// Inbound payload could not be decoded; carries the decoder's text
    #[error("{0}")]
    BadRequest(String),

    /// Login delegated to the authentication service did not succeed
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Login delegated to the greeting service did not succeed
    #[error("failed to get info from downstream service")]
    DownstreamUnavailable,

    /// Outbound response could not be serialized
    #[error("{0}")]
    Encode(String),

    /// Body could not be read; keeps the rejection's own status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            AppError::DownstreamUnavailable | AppError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Rejected { status, .. } => *status,
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Encode(msg) => {
                tracing::error!("Response encode error: {}", msg);
                msg.clone()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Encode(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn rejected(status: StatusCode, msg: impl Into<String>) -> Self {
        AppError::Rejected {
            status,
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::AuthenticationFailed.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::DownstreamUnavailable.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Encode("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_fixed_downstream_messages() {
        assert_eq!(
            AppError::AuthenticationFailed.user_message(),
            "authentication failed"
        );
        assert_eq!(
            AppError::DownstreamUnavailable.user_message(),
            "failed to get info from downstream service"
        );
    }

    #[test]
    fn test_rejection_keeps_its_status() {
        let err = AppError::rejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded");
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.user_message(), "length limit exceeded");
    }

    #[test]
    fn test_bad_request_keeps_decoder_text() {
        let err = AppError::bad_request("expected value at line 1 column 1");
        assert_eq!(err.user_message(), "expected value at line 1 column 1");
    }
}
