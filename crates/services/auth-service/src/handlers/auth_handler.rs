//! Authentication handlers.

use axum::{extract::State, response::Response, routing::post, Router};
use tracing::debug;

use common::{json_ok, AppResult, JsonBody};
use domain::AuthRequest;

use crate::state::AppState;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/authenticate", post(authenticate))
}

/// Issue a token for the posted credentials
pub async fn authenticate(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AuthRequest>,
) -> AppResult<Response> {
    debug!(username = %payload.username, "Authenticating");
    json_ok(&state.auth.authenticate(&payload))
}
