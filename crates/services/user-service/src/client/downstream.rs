//! HTTP client for a single downstream service.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use common::DownstreamConfig;

/// Why a downstream call did not produce the expected body.
#[derive(Error, Debug)]
pub enum DownstreamError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin wrapper around `reqwest` bound to one base URL.
///
/// Every call is bounded by the configured timeout. Dropping the returned
/// future aborts the in-flight request, so a cancelled inbound request
/// cancels its outbound call too.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    http: Client,
    config: DownstreamConfig,
}

impl DownstreamClient {
    pub fn new(config: DownstreamConfig) -> Result<Self, DownstreamError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("user-service/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DownstreamError::Build)?;

        Ok(Self { http, config })
    }

    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// `GET {base}{path}` and decode a `200 OK` JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DownstreamError> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET downstream");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        self.decode(url, response).await
    }

    /// `POST {base}{path}` with a JSON body and decode a `200 OK` JSON reply.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, DownstreamError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(url = %url, "POST downstream");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        self.decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        url: String,
        response: Response,
    ) -> Result<T, DownstreamError> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(DownstreamError::Status { url, status });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        serde_json::from_slice(&bytes).map_err(|source| DownstreamError::Decode { url, source })
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> DownstreamError {
        if source.is_timeout() {
            DownstreamError::Timeout {
                url: url.to_string(),
                timeout: self.config.timeout,
            }
        } else {
            DownstreamError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}
