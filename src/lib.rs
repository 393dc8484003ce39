//! User CRUD API - HTTP CRUD service for a single User resource.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and its request/response schemas
//! - **services**: Application use cases
//! - **infra**: Database handle, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (runs pending migrations first)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserPatch, UserPayload, UserResponse};
pub use errors::{AppError, AppResult};
