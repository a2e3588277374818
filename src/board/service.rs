//! Board service for threadboard.
//!
//! High-level thread and reply operations: listing, posting, bumping,
//! reporting, and password-gated deletion.

use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info};

use super::listing::{latest_replies, MAX_LISTED_THREADS, PREVIEW_REPLIES};
use super::password::{hash_delete_password, verify_delete_password};
use super::projection::Projection;
use super::reply::{NewReply, Reply, ReplyDocument};
use super::sanitize::escape_html_data;
use super::store::{BoardStore, Change};
use super::thread::{NewThread, Thread, ThreadDocument};
use crate::db::Database;
use crate::{BoardError, Result};

/// A thread as shown on a board listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadSummary {
    /// The thread, with its replies cut down to the latest few.
    pub thread: Thread,
    /// Total number of replies before truncation.
    pub reply_count: usize,
}

/// Result of a password-gated delete that found its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Password matched; the thread was removed or the reply redacted.
    Deleted,
    /// Password did not match; nothing changed.
    IncorrectPassword,
}

impl DeleteOutcome {
    /// Literal acknowledgment sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "success",
            DeleteOutcome::IncorrectPassword => "incorrect password",
        }
    }
}

/// Current time, at the precision the store keeps.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Sanitize a required field. An empty value is a validation error.
fn required(field: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(BoardError::Validation(format!("{field} is required")));
    }
    Ok(escape_html_data(value).into_owned())
}

fn thread_not_found() -> BoardError {
    BoardError::NotFound("thread".to_string())
}

fn reply_not_found() -> BoardError {
    BoardError::NotFound("reply".to_string())
}

/// Service for thread and reply operations.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn store<'b>(&'b self, board: &'b str) -> BoardStore<'b> {
        BoardStore::new(self.db.pool(), board)
    }

    /// List the most recently bumped threads of a board.
    ///
    /// At most ten threads, each with at most its three newest replies (oldest
    /// of those first). Hidden fields are never included.
    pub async fn list_threads(&self, board: &str) -> Result<Vec<ThreadSummary>> {
        let threads = self
            .store(board)
            .find_recent(MAX_LISTED_THREADS, Projection::DEFAULT)
            .await?;

        Ok(threads
            .into_iter()
            .map(|mut thread| {
                let reply_count = thread.replies.len();
                let replies = std::mem::take(&mut thread.replies);
                thread.replies = latest_replies(replies, PREVIEW_REPLIES);
                ThreadSummary {
                    thread,
                    reply_count,
                }
            })
            .collect())
    }

    /// Get a whole thread with all of its replies.
    pub async fn get_thread(&self, board: &str, thread_id: &str) -> Result<Thread> {
        self.store(board)
            .find_by_id(thread_id, Projection::DEFAULT)
            .await?
            .ok_or_else(thread_not_found)
    }

    /// Start a new thread.
    pub async fn create_thread(&self, board: &str, new_thread: &NewThread) -> Result<Thread> {
        let text = required("text", &new_thread.text)?;
        let password = required("delete_password", &new_thread.delete_password)?;

        let document = ThreadDocument::new(text, hash_delete_password(&password)?, now());
        self.store(board).insert(&document).await?;

        info!(board, thread_id = %document.id, "Thread created");
        Ok(document.project(Projection::DEFAULT))
    }

    /// Reply to a thread, bumping it to the reply's timestamp.
    pub async fn create_reply(&self, board: &str, new_reply: &NewReply) -> Result<Reply> {
        let thread_id = escape_html_data(&new_reply.thread_id);
        let text = required("text", &new_reply.text)?;
        let password = required("delete_password", &new_reply.delete_password)?;
        let hash = hash_delete_password(&password)?;

        let reply = self
            .store(board)
            .modify(&thread_id, |thread| {
                let reply = ReplyDocument::new(text.clone(), hash.clone(), now());
                let view = reply.project(Projection::DEFAULT);
                thread.push_reply(reply);
                Ok(Change::Save(view))
            })
            .await?
            .ok_or_else(thread_not_found)?;

        info!(board, thread_id = %thread_id, reply_id = %reply.id, "Reply created");
        Ok(reply)
    }

    /// Flag a thread for moderator attention. Reporting twice is fine.
    pub async fn report_thread(&self, board: &str, thread_id: &str) -> Result<()> {
        self.store(board)
            .modify(thread_id, |thread| {
                thread.reported = true;
                Ok(Change::Save(()))
            })
            .await?
            .ok_or_else(thread_not_found)?;

        info!(board, thread_id, "Thread reported");
        Ok(())
    }

    /// Flag a reply for moderator attention. Reporting twice is fine.
    pub async fn report_reply(&self, board: &str, thread_id: &str, reply_id: &str) -> Result<()> {
        self.store(board)
            .modify(thread_id, |thread| {
                let reply = thread.reply_mut(reply_id).ok_or_else(reply_not_found)?;
                reply.reported = true;
                Ok(Change::Save(()))
            })
            .await?
            .ok_or_else(thread_not_found)?;

        info!(board, thread_id, reply_id, "Reply reported");
        Ok(())
    }

    /// Remove a thread if `password` matches its delete password.
    pub async fn delete_thread(
        &self,
        board: &str,
        thread_id: &str,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let store = self.store(board);
        let thread = store
            .find_by_id(thread_id, Projection::DEFAULT.with_delete_password())
            .await?
            .ok_or_else(thread_not_found)?;
        let hash = thread
            .delete_password
            .ok_or_else(|| BoardError::Password("delete password not loaded".to_string()))?;

        if !verify_delete_password(&escape_html_data(password), &hash)? {
            debug!(board, thread_id, "Thread delete refused: incorrect password");
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        if !store.delete(thread_id).await? {
            return Err(thread_not_found());
        }

        info!(board, thread_id, "Thread deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Redact a reply's text if `password` matches its delete password.
    ///
    /// The reply record stays in the thread; only its text changes.
    pub async fn delete_reply(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let password = escape_html_data(password);

        let outcome = self
            .store(board)
            .modify(thread_id, |thread| {
                let reply = thread.reply_mut(reply_id).ok_or_else(reply_not_found)?;
                if !verify_delete_password(&password, &reply.delete_password)? {
                    return Ok(Change::Keep(DeleteOutcome::IncorrectPassword));
                }
                reply.redact();
                Ok(Change::Save(DeleteOutcome::Deleted))
            })
            .await?
            .ok_or_else(thread_not_found)?;

        match outcome {
            DeleteOutcome::Deleted => info!(board, thread_id, reply_id, "Reply deleted"),
            DeleteOutcome::IncorrectPassword => {
                debug!(board, thread_id, reply_id, "Reply delete refused: incorrect password")
            }
        }
        Ok(outcome)
    }
}
