//! OpenAPI description of the board API.

use utoipa::OpenApi;

use super::dto::{
    CreateReplyRequest, CreateThreadRequest, DeleteReplyRequest, DeleteThreadRequest,
    ReplyResponse, ReportReplyRequest, ReportThreadRequest, ThreadResponse,
};
use super::error::ErrorBody;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "threadboard",
        description = "Anonymous message board API. Every error is reported as \
                       {\"error\": \"an error has occurred\"}."
    ),
    paths(
        handlers::threads::list_threads,
        handlers::threads::create_thread,
        handlers::threads::report_thread,
        handlers::threads::delete_thread,
        handlers::replies::get_thread,
        handlers::replies::create_reply,
        handlers::replies::report_reply,
        handlers::replies::delete_reply,
    ),
    components(schemas(
        ThreadResponse,
        ReplyResponse,
        CreateThreadRequest,
        DeleteThreadRequest,
        ReportThreadRequest,
        CreateReplyRequest,
        DeleteReplyRequest,
        ReportReplyRequest,
        ErrorBody,
    )),
    tags(
        (name = "threads", description = "Board listings and thread lifecycle"),
        (name = "replies", description = "Single threads and their replies")
    )
)]
pub struct ApiDoc;
