//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling and checked JSON responses
//! - Configuration structures
//! - The identity/info responder every service exposes at `/`
//! - Tracing setup

pub mod config;
pub mod error;
pub mod extract;
pub mod info;
pub mod response;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use extract::JsonBody;
pub use info::{info_routes, ServiceIdentity};
pub use response::{json_ok, json_response};
pub use telemetry::init_tracing;
