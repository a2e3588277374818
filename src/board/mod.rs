//! Board module for threadboard.
//!
//! This module provides the message board itself:
//! - Thread and reply documents, with hidden-by-default fields
//! - A per-board document store
//! - Listing, posting, reporting and password-gated deletion

mod listing;
mod password;
mod projection;
mod reply;
mod sanitize;
mod service;
mod store;
mod thread;

pub use listing::{latest_replies, MAX_LISTED_THREADS, PREVIEW_REPLIES};
pub use password::{hash_delete_password, verify_delete_password};
pub use projection::Projection;
pub use reply::{NewReply, Reply, ReplyDocument, DELETED_MARKER};
pub use sanitize::escape_html_data;
pub use service::{BoardService, DeleteOutcome, ThreadSummary};
pub use store::{BoardStore, Change, StoredThread, MAX_SAVE_ATTEMPTS};
pub use thread::{NewThread, Thread, ThreadDocument};
