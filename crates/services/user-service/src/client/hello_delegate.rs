//! Login by probing the greeting service.

use async_trait::async_trait;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{InfoResponse, LoginRequest, LoginResponse, HELLO_WORLD_CONNECTED_PREFIX};

use super::{DownstreamClient, LoginDelegate};

/// Ignores the credentials, fetches the greeting service's info document
/// and reports which host answered.
pub struct HelloWorldDelegate {
    client: DownstreamClient,
}

impl HelloWorldDelegate {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LoginDelegate for HelloWorldDelegate {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        debug!(
            username = %request.username,
            endpoint = %self.client.endpoint("/"),
            "Delegating login to helloworld service"
        );

        let info: InfoResponse = self.client.get_json("/").await.map_err(|e| {
            warn!(error = %e, "Helloworld service info request failed");
            AppError::DownstreamUnavailable
        })?;

        Ok(LoginResponse::message(format!(
            "{}{}",
            HELLO_WORLD_CONNECTED_PREFIX, info.hostname
        )))
    }
}
