//! Document store for board threads.
//!
//! Each board is its own collection of thread documents. A `BoardStore` is a
//! handle on one collection; all collections share the `documents` table and
//! are separated by the board name.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use super::projection::Projection;
use super::thread::{Thread, ThreadDocument};
use crate::db::DbPool;
use crate::{BoardError, Result};

/// How many times a read-modify-write is attempted before giving up.
pub const MAX_SAVE_ATTEMPTS: usize = 5;

/// A thread document together with the version it was read at.
#[derive(Debug, Clone)]
pub struct StoredThread {
    /// The full document.
    pub document: ThreadDocument,
    /// Version counter at read time.
    pub version: i64,
}

/// What a modification closure decided to do with the document.
#[derive(Debug)]
pub enum Change<T> {
    /// Persist the modified document and return the value.
    Save(T),
    /// Leave the stored document untouched and return the value.
    Keep(T),
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    body: String,
    version: i64,
}

/// Sortable text form of a timestamp (fixed width, microsecond precision).
fn sort_key(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Handle on the thread collection of a single board.
pub struct BoardStore<'a> {
    pool: &'a DbPool,
    board: &'a str,
}

impl<'a> BoardStore<'a> {
    /// Open the collection for `board`.
    pub fn new(pool: &'a DbPool, board: &'a str) -> Self {
        Self { pool, board }
    }

    /// Insert a new thread document.
    pub async fn insert(&self, document: &ThreadDocument) -> Result<()> {
        let body = serde_json::to_string(document)?;
        sqlx::query("INSERT INTO documents (board, id, bumped_on, body) VALUES (?, ?, ?, ?)")
            .bind(self.board)
            .bind(&document.id)
            .bind(sort_key(&document.bumped_on))
            .bind(body)
            .execute(self.pool)
            .await?;
        debug!(board = self.board, thread_id = %document.id, "Inserted thread");
        Ok(())
    }

    /// Load a full document with its version, for read-modify-write.
    pub async fn load(&self, id: &str) -> Result<Option<StoredThread>> {
        let row: Option<DocumentRow> =
            sqlx::query_as("SELECT body, version FROM documents WHERE board = ? AND id = ?")
                .bind(self.board)
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        match row {
            Some(row) => Ok(Some(StoredThread {
                document: serde_json::from_str(&row.body)?,
                version: row.version,
            })),
            None => Ok(None),
        }
    }

    /// Find a thread by ID, returning only the fields `projection` allows.
    pub async fn find_by_id(&self, id: &str, projection: Projection) -> Result<Option<Thread>> {
        Ok(self
            .load(id)
            .await?
            .map(|stored| stored.document.project(projection)))
    }

    /// Most recently bumped threads first, at most `limit` of them.
    ///
    /// Threads bumped at the same instant are ordered newest insert first.
    pub async fn find_recent(&self, limit: i64, projection: Projection) -> Result<Vec<Thread>> {
        let bodies: Vec<String> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE board = ?
             ORDER BY bumped_on DESC, seq DESC LIMIT ?",
        )
        .bind(self.board)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        bodies
            .iter()
            .map(|body| -> Result<Thread> {
                let document: ThreadDocument = serde_json::from_str(body)?;
                Ok(document.project(projection))
            })
            .collect()
    }

    /// Write back a document if nobody else has written it since it was read.
    ///
    /// Returns `false` when the stored version moved on (or the document is
    /// gone), in which case nothing was written.
    pub async fn save(&self, stored: &StoredThread) -> Result<bool> {
        let body = serde_json::to_string(&stored.document)?;
        let result = sqlx::query(
            "UPDATE documents SET body = ?, bumped_on = ?, version = version + 1
             WHERE board = ? AND id = ? AND version = ?",
        )
        .bind(body)
        .bind(sort_key(&stored.document.bumped_on))
        .bind(self.board)
        .bind(&stored.document.id)
        .bind(stored.version)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Apply `f` to the current document and save it, retrying on conflicts.
    ///
    /// Returns `None` if the thread does not exist. The closure may run more
    /// than once; every run starts from a fresh read.
    pub async fn modify<T, F>(&self, id: &str, mut f: F) -> Result<Option<T>>
    where
        F: FnMut(&mut ThreadDocument) -> Result<Change<T>> + Send,
        T: Send,
    {
        for attempt in 1..=MAX_SAVE_ATTEMPTS {
            let Some(mut stored) = self.load(id).await? else {
                return Ok(None);
            };

            let value = match f(&mut stored.document)? {
                Change::Keep(value) => return Ok(Some(value)),
                Change::Save(value) => value,
            };

            if self.save(&stored).await? {
                return Ok(Some(value));
            }
            debug!(
                board = self.board,
                thread_id = id,
                attempt,
                "Version conflict, retrying"
            );
        }

        Err(BoardError::Conflict(format!("thread {id}")))
    }

    /// Delete a thread. Returns true if a document was removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE board = ? AND id = ?")
            .bind(self.board)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
