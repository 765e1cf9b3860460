//! Domain layer - Records and wire payloads shared by the services.
//!
//! This crate contains plain data types with no infrastructure dependencies.

pub mod auth;
pub mod constants;
pub mod info;
pub mod user;

pub use auth::{AuthRequest, AuthResponse, LoginRequest, LoginResponse};
pub use constants::*;
pub use info::InfoResponse;
pub use user::{MessageResponse, NewUser, UserRecord};
