//! Board front-page listing rules.

use super::reply::Reply;

/// Maximum number of threads on a board listing.
pub const MAX_LISTED_THREADS: i64 = 10;

/// Number of replies previewed per thread on a board listing.
pub const PREVIEW_REPLIES: usize = 3;

/// Keep the `keep` most recent replies, oldest first.
///
/// The full sequence is sorted by `created_on` before truncating. The sort is
/// stable, so replies sharing a timestamp stay in insertion order and the
/// later-inserted one counts as more recent.
pub fn latest_replies(mut replies: Vec<Reply>, keep: usize) -> Vec<Reply> {
    replies.sort_by(|a, b| a.created_on.cmp(&b.created_on));
    let excess = replies.len().saturating_sub(keep);
    replies.drain(..excess);
    replies
}
