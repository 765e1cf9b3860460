//! Integration tests for the greeting service.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use common::{ServiceConfig, ServiceKind};
use domain::InfoResponse;

#[tokio::test]
async fn test_info_reports_hello_world_identity() {
    let peer: SocketAddr = "10.1.2.3:6000".parse().unwrap();
    let app = helloworld_service_lib::build_app(&ServiceConfig::defaults(ServiceKind::HelloWorld))
        .layer(MockConnectInfo(peer));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let info: InfoResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(info.service_name, "Hello World");
    assert_eq!(info.version, "1.0");
    assert_eq!(info.client_ip, "10.1.2.3");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = helloworld_service_lib::build_app(&ServiceConfig::defaults(ServiceKind::HelloWorld));

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
