//! Shared service configuration.
//!
//! Every service in the system is described by one [`ServiceConfig`] value;
//! the differences between services live in [`ServiceKind`], not in code.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use domain::{
    AUTH_SERVICE_DEFAULT_PORT, AUTH_SERVICE_NAME, DEFAULT_VERSION,
    HELLO_WORLD_SERVICE_DEFAULT_PORT, HELLO_WORLD_SERVICE_NAME, USER_SERVICE_DEFAULT_PORT,
    USER_SERVICE_NAME,
};

/// Default outbound request timeout in seconds
pub const DEFAULT_DOWNSTREAM_TIMEOUT_SECS: u64 = 30;

/// Default outbound connect timeout in seconds
pub const DEFAULT_DOWNSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Which service a configuration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    User,
    Auth,
    HelloWorld,
}

impl ServiceKind {
    /// Name reported by the info endpoint
    pub fn service_name(&self) -> &'static str {
        match self {
            ServiceKind::User => USER_SERVICE_NAME,
            ServiceKind::Auth => AUTH_SERVICE_NAME,
            ServiceKind::HelloWorld => HELLO_WORLD_SERVICE_NAME,
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::User => USER_SERVICE_DEFAULT_PORT,
            ServiceKind::Auth => AUTH_SERVICE_DEFAULT_PORT,
            ServiceKind::HelloWorld => HELLO_WORLD_SERVICE_DEFAULT_PORT,
        }
    }

    /// Local URL of this service at its default port
    pub fn default_url(&self) -> String {
        format!("http://localhost:{}", self.default_port())
    }
}

/// Strategy the user service uses to answer `/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginDelegation {
    /// POST the credentials to `{url}/authenticate` and forward the reply
    #[default]
    Auth,
    /// GET `{url}/` from the greeting service and report its hostname
    HelloWorld,
}

impl LoginDelegation {
    /// The service this strategy talks to
    pub fn target(&self) -> ServiceKind {
        match self {
            LoginDelegation::Auth => ServiceKind::Auth,
            LoginDelegation::HelloWorld => ServiceKind::HelloWorld,
        }
    }

    /// Environment variable holding the downstream base URL
    pub fn url_var(&self) -> &'static str {
        match self {
            LoginDelegation::Auth => "AUTH_SERVICE_URL",
            LoginDelegation::HelloWorld => "HELLO_WORLD_SERVICE_URL",
        }
    }
}

impl FromStr for LoginDelegation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auth" => Ok(LoginDelegation::Auth),
            "helloworld" | "hello" | "hello-world" => Ok(LoginDelegation::HelloWorld),
            other => Err(format!("unknown login delegation '{}'", other)),
        }
    }
}

impl fmt::Display for LoginDelegation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginDelegation::Auth => write!(f, "auth"),
            LoginDelegation::HelloWorld => write!(f, "helloworld"),
        }
    }
}

/// A downstream HTTP endpoint and the bounds on calls to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamConfig {
    /// Base URL, without trailing slash
    pub url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl DownstreamConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: normalize_base_url(&url.into()),
            timeout: Duration::from_secs(DEFAULT_DOWNSTREAM_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_DOWNSTREAM_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

/// Configuration for one service instance, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub kind: ServiceKind,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Version string reported by the info endpoint and baked into tokens
    pub version: String,
    /// Peer service URL, if this service knows one
    pub downstream: Option<DownstreamConfig>,
    /// Login strategy (user service only)
    pub login_delegation: Option<LoginDelegation>,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env(kind: ServiceKind) -> Self {
        Self::from_lookup(kind, |key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(kind: ServiceKind, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(|| kind.default_port());

        let login_delegation = match kind {
            ServiceKind::User => Some(
                lookup("LOGIN_DELEGATE")
                    .and_then(|d| d.parse::<LoginDelegation>().ok())
                    .unwrap_or_default(),
            ),
            _ => None,
        };

        let downstream_url = match (kind, login_delegation) {
            (ServiceKind::User, Some(delegation)) => Some(
                lookup(delegation.url_var()).unwrap_or_else(|| delegation.target().default_url()),
            ),
            (ServiceKind::Auth, _) => Some(
                lookup("USER_SERVICE_URL").unwrap_or_else(|| ServiceKind::User.default_url()),
            ),
            _ => None,
        };

        let downstream = downstream_url.map(|url| {
            let mut downstream = DownstreamConfig::new(url);
            if let Some(secs) = lookup("DOWNSTREAM_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
                downstream.timeout = Duration::from_secs(secs);
            }
            if let Some(secs) =
                lookup("DOWNSTREAM_CONNECT_TIMEOUT_SECS").and_then(|s| s.parse().ok())
            {
                downstream.connect_timeout = Duration::from_secs(secs);
            }
            downstream
        });

        Self {
            kind,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            version: lookup("VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            downstream,
            login_delegation,
        }
    }

    /// Defaults for `kind` with no environment applied.
    pub fn defaults(kind: ServiceKind) -> Self {
        Self::from_lookup(kind, |_| None)
    }

    /// Override the bind address (CLI flags take precedence over env).
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Point this service at a different peer URL.
    pub fn with_downstream_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.downstream = Some(match self.downstream.take() {
            Some(existing) => DownstreamConfig {
                url: normalize_base_url(&url),
                ..existing
            },
            None => DownstreamConfig::new(url),
        });
        self
    }

    pub fn service_name(&self) -> &'static str {
        self.kind.service_name()
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_user_defaults() {
        let config = ServiceConfig::defaults(ServiceKind::User);
        assert_eq!(config.port, 8080);
        assert_eq!(config.version, "1.0");
        assert_eq!(config.login_delegation, Some(LoginDelegation::Auth));
        assert_eq!(config.downstream.unwrap().url, "http://localhost:8081");
    }

    #[test]
    fn test_auth_defaults_point_at_user_service() {
        let config = ServiceConfig::defaults(ServiceKind::Auth);
        assert_eq!(config.port, 8081);
        assert_eq!(config.service_name(), "Authentication Service");
        assert_eq!(config.downstream.unwrap().url, "http://localhost:8080");
        assert!(config.login_delegation.is_none());
    }

    #[test]
    fn test_helloworld_has_no_downstream() {
        let config = ServiceConfig::defaults(ServiceKind::HelloWorld);
        assert_eq!(config.port, 8888);
        assert!(config.downstream.is_none());
    }

    #[test]
    fn test_helloworld_delegation_reads_its_own_url() {
        let config = ServiceConfig::from_lookup(
            ServiceKind::User,
            lookup_from(&[
                ("LOGIN_DELEGATE", "helloworld"),
                ("HELLO_WORLD_SERVICE_URL", "http://hello:9000/"),
                ("AUTH_SERVICE_URL", "http://auth:9001"),
            ]),
        );
        assert_eq!(config.login_delegation, Some(LoginDelegation::HelloWorld));
        assert_eq!(config.downstream.unwrap().url, "http://hello:9000");
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config =
            ServiceConfig::from_lookup(ServiceKind::Auth, lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_timeouts_from_env() {
        let config = ServiceConfig::from_lookup(
            ServiceKind::User,
            lookup_from(&[
                ("DOWNSTREAM_TIMEOUT_SECS", "3"),
                ("DOWNSTREAM_CONNECT_TIMEOUT_SECS", "1"),
            ]),
        );
        let downstream = config.downstream.unwrap();
        assert_eq!(downstream.timeout, Duration::from_secs(3));
        assert_eq!(downstream.connect_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_cli_overrides() {
        let config = ServiceConfig::defaults(ServiceKind::User)
            .with_bind(Some("127.0.0.1".into()), Some(9999))
            .with_downstream_url("http://127.0.0.1:7000/");
        assert_eq!(config.bind_addr(), "127.0.0.1:9999");
        assert_eq!(config.downstream.unwrap().url, "http://127.0.0.1:7000");
    }

    #[test]
    fn test_endpoint_join() {
        let downstream = DownstreamConfig::new("http://auth:8081/");
        assert_eq!(downstream.endpoint("/authenticate"), "http://auth:8081/authenticate");
        assert_eq!(downstream.endpoint("/"), "http://auth:8081/");
    }

    #[test]
    fn test_login_delegation_parse() {
        assert_eq!("AUTH".parse::<LoginDelegation>(), Ok(LoginDelegation::Auth));
        assert_eq!(
            "hello-world".parse::<LoginDelegation>(),
            Ok(LoginDelegation::HelloWorld)
        );
        assert!("grpc".parse::<LoginDelegation>().is_err());
    }
}
