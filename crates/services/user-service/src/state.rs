//! Application state for dependency injection.

use std::sync::Arc;

use crate::client::LoginDelegate;
use crate::repository::UserRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub login: Arc<dyn LoginDelegate>,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UserRepository>, login: Arc<dyn LoginDelegate>) -> Self {
        Self { users, login }
    }
}
