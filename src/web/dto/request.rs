//! Request DTOs for the board API.
//!
//! Every body can arrive as JSON or as an HTML form, so all fields are
//! optional at the decoding level and presence is checked by validation.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Create thread request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateThreadRequest {
    /// Thread body.
    #[validate(required, length(min = 1))]
    pub text: Option<String>,
    /// Password needed to delete the thread later.
    #[validate(required, length(min = 1))]
    pub delete_password: Option<String>,
}

/// Delete thread request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteThreadRequest {
    /// Thread to delete.
    #[validate(required)]
    pub thread_id: Option<String>,
    /// Password given when the thread was created. Missing never matches.
    #[serde(default)]
    pub delete_password: String,
}

/// Report thread request. Either field names the thread.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReportThreadRequest {
    /// Thread to report.
    pub thread_id: Option<String>,
    /// Alternative name for `thread_id`, sent by the board frontend.
    pub report_id: Option<String>,
}

impl ReportThreadRequest {
    /// The thread being reported. `thread_id` wins when both are present.
    pub fn target(&self) -> Option<&str> {
        fn present(id: &Option<String>) -> Option<&str> {
            id.as_deref().filter(|id| !id.is_empty())
        }
        present(&self.thread_id).or_else(|| present(&self.report_id))
    }
}

/// Query for a single thread.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ThreadQuery {
    /// Thread to fetch.
    pub thread_id: Option<String>,
}

/// Create reply request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReplyRequest {
    /// Thread to reply to.
    #[validate(required)]
    pub thread_id: Option<String>,
    /// Reply body.
    #[validate(required, length(min = 1))]
    pub text: Option<String>,
    /// Password needed to delete the reply later.
    #[validate(required, length(min = 1))]
    pub delete_password: Option<String>,
}

/// Delete reply request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteReplyRequest {
    /// Thread containing the reply.
    #[validate(required)]
    pub thread_id: Option<String>,
    /// Reply to delete.
    #[validate(required)]
    pub reply_id: Option<String>,
    /// Password given when the reply was created. Missing never matches.
    #[serde(default)]
    pub delete_password: String,
}

/// Report reply request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReportReplyRequest {
    /// Thread containing the reply.
    #[validate(required)]
    pub thread_id: Option<String>,
    /// Reply to report.
    #[validate(required)]
    pub reply_id: Option<String>,
}
