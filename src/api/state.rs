//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{UserRegistry, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User registry
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state backed by an in-memory registry.
    ///
    /// # Errors
    /// Returns a configuration error if the bcrypt cost is out of range.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let registry = UserRegistry::from_config(config)?;
        Ok(Self::new(Arc::new(registry)))
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
