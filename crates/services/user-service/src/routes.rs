//! Route configuration.

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{info_routes, ServiceIdentity};

use crate::handlers::user_routes;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, identity: Arc<ServiceIdentity>) -> Router {
    Router::new()
        // Identity/info at the root path
        .merge(info_routes(identity))
        // Registry and login
        .merge(user_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
