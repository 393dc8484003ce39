//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database handle (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the repository and service on top of an explicitly built
    /// database handle.
    pub fn from_database(database: Database) -> Self {
        let user_repo = Arc::new(UserStore::new(database.clone()));
        let user_service = Arc::new(UserManager::new(user_repo));

        Self {
            user_service,
            database: Arc::new(database),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
