//! Checked JSON response encoding.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppResult;

/// Encode `value` as a JSON response with the given status.
///
/// Serialization failures surface as [`crate::AppError::Encode`] instead of
/// being dropped.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> AppResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

/// Shorthand for a `200 OK` JSON response.
pub fn json_ok<T: Serialize>(value: &T) -> AppResult<Response> {
    json_response(StatusCode::OK, value)
}
