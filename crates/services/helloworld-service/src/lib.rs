//! Hello World Service Library
//!
//! A greeting service that only reports its own identity. The user service
//! talks to it when configured for helloworld login delegation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::{info_routes, ServiceConfig, ServiceIdentity};

/// Error type returned by the server entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the greeting service as an embedded component (for combined binary).
pub async fn run_embedded(config: ServiceConfig) -> Result<(), BoxError> {
    let app = build_app(&config);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!(
        "{} v{} listening on {}",
        config.service_name(),
        config.version,
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build the application router.
pub fn build_app(config: &ServiceConfig) -> Router {
    let identity = Arc::new(ServiceIdentity::from_config(config));
    info_routes(identity).layer(TraceLayer::new_for_http())
}
