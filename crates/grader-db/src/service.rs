//! Service layer over `ExamDb`.
//!
//! `ExamService` owns the database handle and a write gate. All repo methods
//! are implemented as `impl ExamService` in `crate::repos`.

use tokio::sync::{Mutex, MutexGuard};

use crate::ExamDb;
use crate::error::DatabaseError;

/// Storage entry point for tests, problems, and tutoring seeds.
///
/// A single libSQL connection is shared by every caller. The gate serializes
/// statements on it so that a reader never observes a save between `BEGIN`
/// and `COMMIT`, and two saves never nest transactions.
pub struct ExamService {
    db: ExamDb,
    gate: Mutex<()>,
}

impl ExamService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ExamDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `ExamDb`.
    #[must_use]
    pub fn from_db(db: ExamDb) -> Self {
        Self {
            db,
            gate: Mutex::new(()),
        }
    }

    /// Access the underlying database.
    #[must_use]
    pub const fn db(&self) -> &ExamDb {
        &self.db
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}
