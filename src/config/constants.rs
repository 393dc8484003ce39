//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local SQLite file, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// Default upper bound on pooled database connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Responses
// =============================================================================

/// Fixed message for a missing user
pub const MSG_USER_NOT_FOUND: &str = "User not found";

/// Acknowledgement returned by the delete endpoint
pub const MSG_USER_DELETED: &str = "User deleted successfully";
