//! Route configuration.

use std::sync::Arc;

use axum::Router;

use common::{info_routes, ServiceIdentity};

use crate::handlers::auth_routes;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, identity: Arc<ServiceIdentity>) -> Router {
    Router::new()
        .merge(info_routes(identity))
        .merge(auth_routes())
        .with_state(state)
}
