//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserPatch, UserPayload};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a new user
    async fn create_user(&self, payload: UserPayload) -> AppResult<User>;

    /// Replace every mutable field of a user
    async fn replace_user(&self, id: i32, payload: UserPayload) -> AppResult<User>;

    /// Update only the fields present in the patch
    async fn patch_user(&self, id: i32, patch: UserPatch) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, payload: UserPayload) -> AppResult<User> {
        let user = self.repo.create(payload).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn replace_user(&self, id: i32, payload: UserPayload) -> AppResult<User> {
        let user = self.repo.replace(id, payload).await?.ok_or_not_found()?;
        tracing::info!(user_id = id, "User replaced");
        Ok(user)
    }

    async fn patch_user(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        let user = self.repo.patch(id, patch).await?.ok_or_not_found()?;
        tracing::info!(user_id = id, "User patched");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
