//! Database connection and initialization.

use std::collections::HashSet;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, Statement, TransactionTrait,
};
use sea_orm_migration::{seaql_migrations, MigrationName, MigratorTrait, SchemaManager};

use crate::config::Config;

pub mod migrations;

use migrations::Migrator;

/// Bookkeeping table maintained by sea-orm-migration.
const MIGRATION_TABLE: &str = "seaql_migrations";

/// A known migration and whether it has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Database handle owning the connection pool.
///
/// Built once at startup and handed to the repositories; there is no
/// process-global connection.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Initialize database connection and run migrations.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        Migrator::up(&db.connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.database_max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Open a scoped session.
    ///
    /// The returned transaction must be committed explicitly; dropping it
    /// rolls back and returns the connection to the pool.
    pub async fn session(&self) -> Result<DatabaseTransaction, DbErr> {
        self.connection.begin().await
    }

    /// Every known migration in order, with its applied flag.
    ///
    /// A database that was never migrated has no bookkeeping table and
    /// reports everything as pending.
    pub async fn migration_status(&self) -> Result<Vec<MigrationState>, DbErr> {
        let applied = self.applied_versions().await?;

        Ok(Migrator::migrations()
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: applied.contains(m.name()),
            })
            .collect())
    }

    async fn applied_versions(&self) -> Result<HashSet<String>, DbErr> {
        let manager = SchemaManager::new(&self.connection);
        if !manager.has_table(MIGRATION_TABLE).await? {
            return Ok(HashSet::new());
        }

        let rows = seaql_migrations::Entity::find()
            .all(&self.connection)
            .await?;
        Ok(rows.into_iter().map(|row| row.version).collect())
    }

    /// Apply pending migrations; returns the names that were applied.
    pub async fn apply_pending(&self) -> Result<Vec<String>, DbErr> {
        let pending: Vec<String> = self
            .migration_status()
            .await?
            .into_iter()
            .filter(|m| !m.applied)
            .map(|m| m.name)
            .collect();

        if !pending.is_empty() {
            Migrator::up(&self.connection, None).await?;
        }
        Ok(pending)
    }

    /// Revert the most recently applied migration, if there is one.
    pub async fn revert_last(&self) -> Result<Option<String>, DbErr> {
        let last = self
            .migration_status()
            .await?
            .into_iter()
            .filter(|m| m.applied)
            .map(|m| m.name)
            .last();

        if last.is_some() {
            Migrator::down(&self.connection, Some(1)).await?;
        }
        Ok(last)
    }

    /// Drop every table, then apply all migrations from scratch.
    pub async fn reset(&self) -> Result<Vec<String>, DbErr> {
        Migrator::fresh(&self.connection).await?;

        Ok(Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
