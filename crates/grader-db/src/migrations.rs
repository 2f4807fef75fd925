//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. Every step is safe to re-run: tables use `IF NOT EXISTS`
//! and added columns are only added when `pragma_table_info` lacks them.
//! Existing data is never dropped.

use crate::ExamDb;
use crate::error::DatabaseError;

/// Initial schema: `tests` and `problems`, cascade FK, two indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

/// Columns introduced after the initial schema: `(table, column, definition)`.
const MIGRATION_002_COLUMNS: &[(&str, &str, &str)] = &[
    ("tests", "total_problems", "INTEGER NOT NULL DEFAULT 0"),
    ("tests", "correct_problems", "INTEGER NOT NULL DEFAULT 0"),
    ("problems", "correct_answer", "TEXT"),
    ("problems", "selected_answer", "TEXT"),
];

impl ExamDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;

        for (table, column, definition) in MIGRATION_002_COLUMNS {
            if self.column_exists(table, column).await? {
                continue;
            }
            self.conn
                .execute(
                    &format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"),
                    (),
                )
                .await
                .map_err(|e| DatabaseError::Migration(format!("002_scoring {table}.{column}: {e}")))?;
            tracing::info!(table, column, "added column");
        }
        Ok(())
    }

    async fn column_exists(&self, table: &str, column: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
            )
            .await
            .map_err(|e| DatabaseError::Migration(format!("inspect {table}.{column}: {e}")))?;
        Ok(rows.next().await?.is_some())
    }
}
