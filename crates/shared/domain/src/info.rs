//! Identity/info payload served at the root path of every service.

use serde::{Deserialize, Serialize};

/// Process and request metadata reported by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InfoResponse {
    pub hostname: String,
    pub os: String,
    pub client_ip: String,
    /// Older greeting-service builds report this as `api_version`
    #[serde(alias = "api_version")]
    pub version: String,
    pub service_name: String,
}
