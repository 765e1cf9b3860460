//! Auth Service Library
//!
//! This crate issues login tokens over HTTP. It can be run as a standalone
//! service or embedded in the combined binary.

pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::{ServiceConfig, ServiceIdentity};

use crate::routes::create_router;
use crate::service::TokenIssuer;
use crate::state::AppState;

/// Error type returned by the server entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the auth service as an embedded component (for combined binary).
pub async fn run_embedded(config: ServiceConfig) -> Result<(), BoxError> {
    run_server_with_config(config).await
}

/// Build the application router.
pub fn build_app(config: &ServiceConfig) -> Router {
    let state = AppState::new(Arc::new(TokenIssuer::new(config.version.clone())));
    let identity = Arc::new(ServiceIdentity::from_config(config));

    create_router(state, identity).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: ServiceConfig) -> Result<(), BoxError> {
    let app = build_app(&config);

    if let Some(peer) = &config.downstream {
        info!(user_service = %peer.url, "Peer user service");
    }

    // Build address
    let addr: SocketAddr = config.bind_addr().parse()?;
    info!(
        "{} v{} listening on {}",
        config.service_name(),
        config.version,
        addr
    );

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
