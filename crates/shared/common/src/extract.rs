//! JSON body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON extractor that rejects malformed bodies with a 400 carrying the
/// decoder's message.
///
/// Unlike `axum::Json`, the `Content-Type` header is not required. Bodies
/// that cannot be buffered (for example over axum's default 2 MB limit)
/// keep the status of the body rejection.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::rejected(e.status(), e.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| AppError::bad_request(e.to_string()))?;

        Ok(JsonBody(value))
    }
}
