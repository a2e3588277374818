//! Thread model for threadboard.
//!
//! A thread document embeds all of its replies, in creation order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::projection::Projection;
use super::reply::{Reply, ReplyDocument};

/// Stored form of a thread, every field present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadDocument {
    /// Thread ID, unique within the board.
    pub id: String,
    /// Thread body (already sanitized).
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last activity timestamp: creation, or the newest reply.
    pub bumped_on: DateTime<Utc>,
    /// Whether the thread has been reported.
    pub reported: bool,
    /// Argon2 hash of the sanitized delete password.
    pub delete_password: String,
    /// Replies in creation order.
    #[serde(default)]
    pub replies: Vec<ReplyDocument>,
}

impl ThreadDocument {
    /// Create a fresh thread with a new ID and no replies.
    pub fn new(
        text: impl Into<String>,
        delete_password: impl Into<String>,
        created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            created_on,
            bumped_on: created_on,
            reported: false,
            delete_password: delete_password.into(),
            replies: Vec::new(),
        }
    }

    /// Append a reply and bump the thread to the reply's timestamp.
    pub fn push_reply(&mut self, reply: ReplyDocument) {
        self.bumped_on = reply.created_on;
        self.replies.push(reply);
    }

    /// Find a reply by ID.
    pub fn reply_mut(&mut self, reply_id: &str) -> Option<&mut ReplyDocument> {
        self.replies.iter_mut().find(|r| r.id == reply_id)
    }

    /// Build the read view of this thread.
    pub fn project(&self, projection: Projection) -> Thread {
        Thread {
            id: self.id.clone(),
            text: self.text.clone(),
            created_on: self.created_on,
            bumped_on: self.bumped_on,
            reported: projection.reported.then_some(self.reported),
            delete_password: projection
                .delete_password
                .then(|| self.delete_password.clone()),
            replies: self
                .replies
                .iter()
                .map(|r| r.project(projection))
                .collect(),
        }
    }
}

/// Read view of a thread. Hidden fields are `None` unless projected in.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// Thread ID.
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last activity timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Reported flag, if requested.
    pub reported: Option<bool>,
    /// Delete password hash, if requested.
    pub delete_password: Option<String>,
    /// Replies in creation order.
    pub replies: Vec<Reply>,
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Thread body.
    pub text: String,
    /// Password that allows the author to delete the thread later.
    pub delete_password: String,
}

impl NewThread {
    /// Create a new thread request.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
