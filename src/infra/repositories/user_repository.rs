//! User repository implementation.
//!
//! Every method runs inside its own scoped session: a transaction opened on
//! entry and committed after the mutation. Returning early (not found, or an
//! error) drops the transaction, which rolls it back and releases the
//! connection.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserPatch, UserPayload};
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Single-entity methods report a missing row as `None` / `false`; turning
/// that into an error is the service's job.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a new user; storage assigns the id
    async fn create(&self, payload: UserPayload) -> AppResult<User>;

    /// Overwrite all mutable fields of an existing user
    async fn replace(&self, id: i32, payload: UserPayload) -> AppResult<Option<User>>;

    /// Apply an allow-listed partial update to an existing user
    async fn patch(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>>;

    /// Delete user by ID; `false` when no such user exists
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: Database,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.db.connection())
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.connection())
            .await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, payload: UserPayload) -> AppResult<User> {
        let txn = self.db.session().await?;

        let active_model = ActiveModel {
            name: Set(payload.name),
            email: Set(payload.email),
            age: Set(payload.age),
            ..Default::default()
        };
        let model = active_model.insert(&txn).await?;

        txn.commit().await?;
        Ok(User::from(model))
    }

    async fn replace(&self, id: i32, payload: UserPayload) -> AppResult<Option<User>> {
        let txn = self.db.session().await?;

        let Some(existing) = UserEntity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.replace_with(payload);
        let model = active.update(&txn).await?;

        txn.commit().await?;
        Ok(Some(User::from(model)))
    }

    async fn patch(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>> {
        let txn = self.db.session().await?;

        let Some(existing) = UserEntity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        // Nothing to write; skip the UPDATE
        if patch.is_empty() {
            txn.commit().await?;
            return Ok(Some(User::from(existing)));
        }

        let mut active = existing.into_active_model();
        active.apply_patch(patch);
        let model = active.update(&txn).await?;

        txn.commit().await?;
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.session().await?;

        let result = UserEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;
        Ok(true)
    }
}
