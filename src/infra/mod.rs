//! Infrastructure layer - External systems integration
//!
//! - Database connection handle and migrations
//! - Repositories over the SeaORM entities

pub mod db;
pub mod repositories;

pub use db::{Database, MigrationState};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
