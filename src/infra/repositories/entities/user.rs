//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{User, UserPatch, UserPayload};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Overwrite every mutable column with the payload.
    pub fn replace_with(&mut self, payload: UserPayload) {
        self.name = Set(payload.name);
        self.email = Set(payload.email);
        self.age = Set(payload.age);
    }

    /// Set only the columns the patch targets. `id` is never touched.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(Some(name)) = patch.name {
            self.name = Set(name);
        }
        if let Some(Some(email)) = patch.email {
            self.email = Set(email);
        }
        if let Some(age) = patch.age {
            self.age = Set(age);
        }
    }
}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            age: model.age,
        }
    }
}
