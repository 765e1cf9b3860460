//! User handlers.

use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Router,
};
use tracing::{debug, info};

use common::{json_ok, AppResult, JsonBody};
use domain::{LoginRequest, MessageResponse, NewUser, USER_CREATED_MESSAGE};

use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/create", post(create_user))
        .route("/login", post(login))
}

/// List all registered users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<domain::UserRecord>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Response> {
    let users = state.users.list();
    debug!(count = users.len(), "Listing users");
    json_ok(&users)
}

/// Register a user
#[utoipa::path(
    post,
    path = "/create",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> AppResult<Response> {
    let user = state.users.create(payload);
    info!(id = user.id, username = %user.username, "User created");
    json_ok(&MessageResponse::new(USER_CREATED_MESSAGE))
}

/// Log in through the configured downstream service
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login result from the downstream service", body = domain::LoginResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 401, description = "Authentication service rejected or unreachable"),
        (status = 500, description = "Helloworld service unreachable")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> AppResult<Response> {
    debug!(username = %payload.username, "Login requested");
    let result = state.login.login(&payload).await?;
    json_ok(&result)
}
