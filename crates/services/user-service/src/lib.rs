//! User Service Library
//!
//! This crate provides the in-memory user registry over HTTP and answers
//! logins by delegating to a downstream service. It can be run as a
//! standalone service or embedded in the combined binary.

pub mod client;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::{ServiceConfig, ServiceIdentity};

use crate::client::build_delegate;
use crate::repository::UserStore;
use crate::routes::create_router;
use crate::state::AppState;

/// Error type returned by the server entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the user service as an embedded component (for combined binary).
pub async fn run_embedded(config: ServiceConfig) -> Result<(), BoxError> {
    run_server_with_config(config).await
}

/// Build the application router with a fresh registry.
pub fn build_app(config: &ServiceConfig) -> Result<Router, BoxError> {
    let delegation = config.login_delegation.unwrap_or_default();
    let downstream = config
        .downstream
        .clone()
        .ok_or("user service requires a downstream service URL")?;

    let login = build_delegate(delegation, downstream)?;
    let users = Arc::new(UserStore::new());
    let state = AppState::new(users, login);
    let identity = Arc::new(ServiceIdentity::from_config(config));

    Ok(create_router(state, identity).layer(TraceLayer::new_for_http()))
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: ServiceConfig) -> Result<(), BoxError> {
    let app = build_app(&config)?;

    let delegation = config.login_delegation.unwrap_or_default();
    if let Some(downstream) = &config.downstream {
        info!(
            login_delegate = %delegation,
            downstream = %downstream.url,
            timeout = ?downstream.timeout,
            "Login delegation configured"
        );
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
