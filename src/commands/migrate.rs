//! Migrate command - Schema management for the `users` table.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, MigrationState};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let report = run(&db, args.action).await?;
    println!("{}", report);

    Ok(())
}

/// Perform one migration action and describe the outcome.
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<String> {
    let report = match action {
        MigrateAction::Up => {
            let applied = db.apply_pending().await.map_err(migration_failed)?;
            tracing::info!(count = applied.len(), "Pending migrations applied");
            describe("Applied", &applied)
        }
        MigrateAction::Down => match db.revert_last().await.map_err(migration_failed)? {
            Some(name) => {
                tracing::info!(migration = %name, "Migration reverted");
                format!("Reverted {}", name)
            }
            None => "Nothing to revert".to_string(),
        },
        MigrateAction::Status => {
            let states = db.migration_status().await.map_err(migration_failed)?;
            render_status(&states)
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables before reapplying migrations");
            let applied = db.reset().await.map_err(migration_failed)?;
            describe("Reapplied", &applied)
        }
    };

    Ok(report)
}

fn migration_failed(e: DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}

fn describe(verb: &str, names: &[String]) -> String {
    if names.is_empty() {
        return "Schema is up to date".to_string();
    }

    let mut lines = vec![format!("{} {} migration(s):", verb, names.len())];
    lines.extend(names.iter().map(|name| format!("  {}", name)));
    lines.join("\n")
}

/// One line per migration: `[x]` applied, `[ ]` pending.
fn render_status(states: &[MigrationState]) -> String {
    states
        .iter()
        .map(|state| {
            let mark = if state.applied { 'x' } else { ' ' };
            format!("[{}] {}", mark, state.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_status_marks_applied() {
        let states = vec![
            MigrationState {
                name: "m1".to_string(),
                applied: true,
            },
            MigrationState {
                name: "m2".to_string(),
                applied: false,
            },
        ];

        assert_eq!(render_status(&states), "[x] m1\n[ ] m2");
    }

    #[test]
    fn test_describe_lists_names() {
        let names = vec!["m1".to_string(), "m2".to_string()];
        assert_eq!(
            describe("Applied", &names),
            "Applied 2 migration(s):\n  m1\n  m2"
        );
        assert_eq!(describe("Applied", &[]), "Schema is up to date");
    }
}
