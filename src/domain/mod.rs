//! Domain layer - Core business entities.
//!
//! Contains the User entity plus the schemas used to create, replace and
//! partially update it. No infrastructure dependencies.

pub mod user;

pub use user::{User, UserPatch, UserPayload, UserResponse};
