//! Reply model for threadboard.
//!
//! Replies are embedded in their parent thread document and never removed,
//! only redacted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::projection::Projection;

/// Text a reply is overwritten with when its author deletes it.
pub const DELETED_MARKER: &str = "[deleted]";

/// Stored form of a reply, every field present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyDocument {
    /// Reply ID, unique within the parent thread.
    pub id: String,
    /// Reply body (already sanitized).
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Whether the reply has been reported.
    pub reported: bool,
    /// Argon2 hash of the sanitized delete password.
    pub delete_password: String,
}

impl ReplyDocument {
    /// Create a fresh, unreported reply with a new ID.
    pub fn new(
        text: impl Into<String>,
        delete_password: impl Into<String>,
        created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            created_on,
            reported: false,
            delete_password: delete_password.into(),
        }
    }

    /// Replace the text with the deletion marker. Other fields are kept.
    pub fn redact(&mut self) {
        self.text = DELETED_MARKER.to_string();
    }

    /// Build the read view of this reply.
    pub fn project(&self, projection: Projection) -> Reply {
        Reply {
            id: self.id.clone(),
            text: self.text.clone(),
            created_on: self.created_on,
            reported: projection.reported.then_some(self.reported),
            delete_password: projection
                .delete_password
                .then(|| self.delete_password.clone()),
        }
    }
}

/// Read view of a reply. Hidden fields are `None` unless projected in.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Reply ID.
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Reported flag, if requested.
    pub reported: Option<bool>,
    /// Delete password hash, if requested.
    pub delete_password: Option<String>,
}

/// Data for creating a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// ID of the thread to reply to.
    pub thread_id: String,
    /// Reply body.
    pub text: String,
    /// Password that allows the author to delete the reply later.
    pub delete_password: String,
}

impl NewReply {
    /// Create a new reply request.
    pub fn new(
        thread_id: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
