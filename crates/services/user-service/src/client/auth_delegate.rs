//! Login by delegating to the authentication service.

use async_trait::async_trait;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{LoginRequest, LoginResponse};

use super::{DownstreamClient, LoginDelegate};

/// Path of the authentication endpoint on the downstream service
pub const AUTHENTICATE_PATH: &str = "/authenticate";

/// POSTs the caller's credentials to `{url}/authenticate` and forwards the
/// `{message, token}` reply unchanged.
pub struct AuthDelegate {
    client: DownstreamClient,
}

impl AuthDelegate {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LoginDelegate for AuthDelegate {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        debug!(
            username = %request.username,
            endpoint = %self.client.endpoint(AUTHENTICATE_PATH),
            "Delegating login to auth service"
        );

        let mut response: LoginResponse = self
            .client
            .post_json(AUTHENTICATE_PATH, request)
            .await
            .map_err(|e| {
                warn!(error = %e, "Auth service login failed");
                AppError::AuthenticationFailed
            })?;

        // An empty token is omitted rather than forwarded as "".
        response.token = response.token.filter(|t| !t.is_empty());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use common::DownstreamConfig;

    use super::*;

    fn delegate_for(server: &MockServer) -> AuthDelegate {
        AuthDelegate::new(DownstreamClient::new(DownstreamConfig::new(server.uri())).unwrap())
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            username: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_forwards_downstream_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/authenticate"))
            .and(body_partial_json(serde_json::json!({"username": "Alice", "password": "secret"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "ok", "token": "t1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = delegate_for(&server).login(&credentials()).await.unwrap();
        assert_eq!(response.message, "ok");
        assert_eq!(response.token.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "ok", "token": "t1"})),
            )
            .mount(&server)
            .await;

        let err = delegate_for(&server).login(&credentials()).await.unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_undecodable_reply_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": 7})))
            .mount(&server)
            .await;

        let err = delegate_for(&server).login(&credentials()).await.unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));
    }
}
