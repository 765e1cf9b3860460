//! Login delegation to a downstream service.
//!
//! `/login` is answered by exactly one [`LoginDelegate`], chosen at startup
//! from [`LoginDelegation`].

mod auth_delegate;
mod downstream;
mod hello_delegate;

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppResult, DownstreamConfig, LoginDelegation};
use domain::{LoginRequest, LoginResponse};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use auth_delegate::AuthDelegate;
pub use downstream::{DownstreamClient, DownstreamError};
pub use hello_delegate::HelloWorldDelegate;

/// Strategy that turns a login request into a login result by calling a
/// downstream service.
///
/// Implementations map every downstream failure to their own fixed
/// user-visible error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LoginDelegate: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse>;
}

/// Build the delegate for `delegation` talking to `downstream`.
pub fn build_delegate(
    delegation: LoginDelegation,
    downstream: DownstreamConfig,
) -> Result<Arc<dyn LoginDelegate>, DownstreamError> {
    let client = DownstreamClient::new(downstream)?;
    let delegate: Arc<dyn LoginDelegate> = match delegation {
        LoginDelegation::Auth => Arc::new(AuthDelegate::new(client)),
        LoginDelegation::HelloWorld => Arc::new(HelloWorldDelegate::new(client)),
    };
    Ok(delegate)
}
