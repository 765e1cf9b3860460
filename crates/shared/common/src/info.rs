//! Identity/info responder shared by every service.
//!
//! Reports the process hostname, a normalized OS name, the caller's
//! address and the configured version under the service's display name.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    response::Response,
    routing::get,
    Router,
};

use domain::{InfoResponse, FORWARDED_FOR_HEADER, UNKNOWN_OS};

use crate::config::ServiceConfig;
use crate::error::AppResult;
use crate::response::json_ok;

/// Environment-style indicator the OS name is derived from
const OS_TYPE_VAR: &str = "OSTYPE";

/// Fixed identity of a running service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    pub service_name: String,
    pub version: String,
}

impl ServiceIdentity {
    pub fn new(service_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            version: version.into(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.service_name(), config.version.clone())
    }

    /// Describe this process as seen by the request's caller.
    pub fn describe(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> InfoResponse {
        InfoResponse {
            hostname: local_hostname(),
            os: os_name(env::var(OS_TYPE_VAR).ok().as_deref()),
            client_ip: client_ip(headers, peer),
            version: self.version.clone(),
            service_name: self.service_name.clone(),
        }
    }
}

/// Process hostname, or an empty string when it cannot be read.
pub fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_default()
}

/// Normalize an OS-type indicator such as `linux-gnu` into `Linux-Gnu`.
pub fn os_name(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => title_case(&value.to_lowercase()),
        _ => UNKNOWN_OS.to_string(),
    }
}

/// Upper-case the first letter of every word; a word starts after any
/// character that is not alphanumeric or `_`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// Caller address: `X-Forwarded-For` when present and non-empty, else the
/// transport peer without its port.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_default()
}

/// Create the root info route for a service.
pub fn info_routes<S>(identity: Arc<ServiceIdentity>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_info))
        .with_state(identity)
}

/// Info endpoint
pub async fn get_info(
    State(identity): State<Arc<ServiceIdentity>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let peer = connect_info.map(|ConnectInfo(addr)| addr);
    json_ok(&identity.describe(&headers, peer))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn peer() -> SocketAddr {
        "10.0.0.7:53211".parse().unwrap()
    }

    #[test]
    fn test_os_name_title_cases() {
        assert_eq!(os_name(Some("linux-gnu")), "Linux-Gnu");
        assert_eq!(os_name(Some("DARWIN")), "Darwin");
        assert_eq!(os_name(Some("msys")), "Msys");
    }

    #[test]
    fn test_os_name_defaults_to_unknown() {
        assert_eq!(os_name(None), "Unknown");
        assert_eq!(os_name(Some("")), "Unknown");
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("darwin23.0"), "Darwin23.0");
        assert_eq!(title_case("foo_bar baz"), "Foo_bar Baz");
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR_HEADER, "203.0.113.9".parse().unwrap());
        assert_eq!(client_ip(&headers, Some(peer())), "203.0.113.9");
    }

    #[test]
    fn test_client_ip_ignores_empty_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR_HEADER, "".parse().unwrap());
        assert_eq!(client_ip(&headers, Some(peer())), "10.0.0.7");
    }

    #[test]
    fn test_client_ip_strips_ipv6_port() {
        let addr: SocketAddr = "[::1]:8080".parse().unwrap();
        assert_eq!(client_ip(&HeaderMap::new(), Some(addr)), "::1");
    }

    #[test]
    fn test_client_ip_without_peer_is_empty() {
        assert_eq!(client_ip(&HeaderMap::new(), None), "");
    }

    #[tokio::test]
    async fn test_info_route_reports_identity() {
        let identity = Arc::new(ServiceIdentity::new("Test Service", "9.9"));
        let app: Router = info_routes(identity).layer(MockConnectInfo(peer()));

        let request = Request::builder()
            .uri("/")
            .header("X-Forwarded-For", "198.51.100.1")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let info: InfoResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(info.service_name, "Test Service");
        assert_eq!(info.version, "9.9");
        assert_eq!(info.client_ip, "198.51.100.1");
        assert_eq!(info.hostname, local_hostname());
    }

    #[tokio::test]
    async fn test_info_route_falls_back_to_peer() {
        let identity = Arc::new(ServiceIdentity::new("Test Service", "1.0"));
        let app: Router = info_routes(identity).layer(MockConnectInfo(peer()));

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let info: InfoResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(info.client_ip, "10.0.0.7");
    }
}
