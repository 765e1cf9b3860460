//! Authentication service - Issues tokens for login requests.
//!
//! Credentials are not verified: every request is accepted and receives a
//! deterministic token. Callers must treat this as a stub contract.

use common::info::local_hostname;
use domain::{AuthRequest, AuthResponse, AUTHENTICATION_SUCCESSFUL_MESSAGE};

/// Authentication service trait for dependency injection.
pub trait AuthService: Send + Sync {
    /// Authenticate a request and return a token
    fn authenticate(&self, request: &AuthRequest) -> AuthResponse;
}

/// Issues `token_for_<username>_<hostname>_<version>` tokens.
pub struct TokenIssuer {
    version: String,
}

impl TokenIssuer {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Token for `username` as issued by `hostname`.
    pub fn token_for(&self, username: &str, hostname: &str) -> String {
        format!(
            "token_for_{}_{}_{}",
            username.to_lowercase(),
            hostname,
            self.version
        )
    }
}

impl AuthService for TokenIssuer {
    fn authenticate(&self, request: &AuthRequest) -> AuthResponse {
        AuthResponse {
            message: AUTHENTICATION_SUCCESSFUL_MESSAGE.to_string(),
            token: self.token_for(&request.username, &local_hostname()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_format() {
        let issuer = TokenIssuer::new("1.0");
        assert_eq!(issuer.token_for("Alice", "host-a"), "token_for_alice_host-a_1.0");
    }

    #[test]
    fn test_any_credentials_are_accepted() {
        let issuer = TokenIssuer::new("2.1");
        let response = issuer.authenticate(&AuthRequest {
            username: "BOB".to_string(),
            password: "definitely-wrong".to_string(),
        });

        assert_eq!(response.message, "Authentication successful");
        assert_eq!(
            response.token,
            format!("token_for_bob_{}_2.1", local_hostname())
        );
    }

    #[test]
    fn test_token_is_deterministic() {
        let issuer = TokenIssuer::new("1.0");
        let request = AuthRequest {
            username: "carol".to_string(),
            password: String::new(),
        };
        assert_eq!(issuer.authenticate(&request), issuer.authenticate(&request));
    }
}
