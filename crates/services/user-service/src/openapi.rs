//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{InfoResponse, LoginRequest, LoginResponse, MessageResponse, NewUser, UserRecord};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::login,
    ),
    components(
        schemas(
            UserRecord,
            NewUser,
            MessageResponse,
            LoginRequest,
            LoginResponse,
            InfoResponse,
        )
    ),
    tags(
        (name = "Users", description = "In-memory user registry"),
        (name = "Authentication", description = "Login delegated to a downstream service"),
    )
)]
pub struct ApiDoc;
