//! # grader-db
//!
//! libSQL storage for graded tests and their problems.
//!
//! Two tables: `tests` owns `problems` through a cascading foreign key. A test
//! and all of its problems are written in one transaction, so a test row never
//! exists without the children it was saved with. Reads return empty results
//! for unknown ids and errors only for real storage faults.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: one libSQL database and its connection.
pub struct ExamDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ExamDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Enables foreign keys and runs migrations on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let exam_db = Self { db, conn };
        exam_db.run_migrations().await?;
        tracing::debug!(path, "opened exam database");
        Ok(exam_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether foreign-key enforcement is active on this connection.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the pragma cannot be read.
    pub async fn foreign_keys_enabled(&self) -> Result<bool, DatabaseError> {
        let mut rows = self.conn.query("PRAGMA foreign_keys", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)? == 1)
    }
}
