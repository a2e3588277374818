//! Response DTOs for the board API.
//!
//! These types have no `reported` or `delete_password` fields at all, so no
//! response built from them can leak either.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::board::{Reply, Thread, ThreadSummary};

/// Reply as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReplyResponse {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Reply body, or "[deleted]".
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}

/// Thread as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ThreadResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last activity timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Replies, oldest first.
    pub replies: Vec<ReplyResponse>,
    /// Total reply count. Only present on board listings, where `replies`
    /// is truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replycount: Option<usize>,
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            id: thread.id,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: thread.replies.into_iter().map(Into::into).collect(),
            replycount: None,
        }
    }
}

impl From<ThreadSummary> for ThreadResponse {
    fn from(summary: ThreadSummary) -> Self {
        Self {
            replycount: Some(summary.reply_count),
            ..summary.thread.into()
        }
    }
}
