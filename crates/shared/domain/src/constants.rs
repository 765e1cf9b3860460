//! Domain-level constants.
//!
//! Service identities, default ports and the fixed messages that make up
//! the wire contract between the services.

// =============================================================================
// Service Identities
// =============================================================================

/// Display name reported by the user service's info endpoint
pub const USER_SERVICE_NAME: &str = "User Service";

/// Display name reported by the authentication service's info endpoint
pub const AUTH_SERVICE_NAME: &str = "Authentication Service";

/// Display name reported by the greeting service's info endpoint
pub const HELLO_WORLD_SERVICE_NAME: &str = "Hello World";

/// Version reported when `VERSION` is not set
pub const DEFAULT_VERSION: &str = "1.0";

// =============================================================================
// Default Ports
// =============================================================================

pub const USER_SERVICE_DEFAULT_PORT: u16 = 8080;
pub const AUTH_SERVICE_DEFAULT_PORT: u16 = 8081;
pub const HELLO_WORLD_SERVICE_DEFAULT_PORT: u16 = 8888;

// =============================================================================
// Messages
// =============================================================================

/// Returned by `POST /create` on success
pub const USER_CREATED_MESSAGE: &str = "User created successfully";

/// Returned by `POST /authenticate` on success
pub const AUTHENTICATION_SUCCESSFUL_MESSAGE: &str = "Authentication successful";

/// Prefix of the login message synthesized from a greeting-service reply
pub const HELLO_WORLD_CONNECTED_PREFIX: &str = "Successfully connected to helloworld service. Hostname: ";

/// OS name reported when the OS-type indicator is absent
pub const UNKNOWN_OS: &str = "Unknown";

// =============================================================================
// Headers
// =============================================================================

/// Header consulted first when resolving the caller's address
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
