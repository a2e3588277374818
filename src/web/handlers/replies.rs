//! Reply handlers for the board API.

use axum::{
    extract::State,
    http::HeaderMap,
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, NewReply};
use crate::web::dto::{
    ApiPath, ApiQuery, CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest, ThreadQuery,
    ThreadResponse, ValidatedPayload,
};
use crate::web::error::ApiError;
use crate::web::handlers::{redirect_back, AppState};

/// GET /api/replies/:board?thread_id= - Get a whole thread.
#[utoipa::path(
    get,
    path = "/api/replies/{board}",
    tag = "replies",
    params(
        ("board" = String, Path, description = "Board name"),
        ThreadQuery
    ),
    responses(
        (status = 200, description = "Thread with every reply", body = ThreadResponse),
        (status = 400, description = "Missing thread_id", body = crate::web::error::ErrorBody),
        (status = 404, description = "Thread not found", body = crate::web::error::ErrorBody)
    )
)]
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
    ApiQuery(query): ApiQuery<ThreadQuery>,
) -> Result<Json<ThreadResponse>, ApiError> {
    let thread_id = query
        .thread_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("thread_id is required"))?;

    let service = BoardService::new(&state.db);
    let thread = service.get_thread(&board, &thread_id).await?;

    Ok(Json(thread.into()))
}

/// POST /api/replies/:board - Reply to a thread.
#[utoipa::path(
    post,
    path = "/api/replies/{board}",
    tag = "replies",
    params(
        ("board" = String, Path, description = "Board name")
    ),
    request_body(content = CreateReplyRequest, description = "JSON or URL-encoded form"),
    responses(
        (status = 303, description = "Reply created; redirect to the referring page or the thread"),
        (status = 400, description = "Missing field", body = crate::web::error::ErrorBody),
        (status = 404, description = "Thread not found", body = crate::web::error::ErrorBody)
    )
)]
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
    headers: HeaderMap,
    ValidatedPayload(req): ValidatedPayload<CreateReplyRequest>,
) -> Result<Redirect, ApiError> {
    let thread_id = req.thread_id.unwrap_or_default();
    let new_reply = NewReply::new(
        thread_id.as_str(),
        req.text.unwrap_or_default(),
        req.delete_password.unwrap_or_default(),
    );

    let service = BoardService::new(&state.db);
    service.create_reply(&board, &new_reply).await?;

    Ok(redirect_back(&headers, format!("/b/{board}/{thread_id}")))
}

/// PUT /api/replies/:board - Report a reply.
#[utoipa::path(
    put,
    path = "/api/replies/{board}",
    tag = "replies",
    params(
        ("board" = String, Path, description = "Board name")
    ),
    request_body(content = ReportReplyRequest, description = "JSON or URL-encoded form"),
    responses(
        (status = 200, description = "Reply reported", body = String, example = json!("reported")),
        (
            status = 404,
            description = "Thread or reply not found",
            body = crate::web::error::ErrorBody
        )
    )
)]
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
    ValidatedPayload(req): ValidatedPayload<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = req.thread_id.unwrap_or_default();
    let reply_id = req.reply_id.unwrap_or_default();

    let service = BoardService::new(&state.db);
    service.report_reply(&board, &thread_id, &reply_id).await?;

    Ok("reported")
}

/// DELETE /api/replies/:board - Redact a reply with its password.
#[utoipa::path(
    delete,
    path = "/api/replies/{board}",
    tag = "replies",
    params(
        ("board" = String, Path, description = "Board name")
    ),
    request_body(content = DeleteReplyRequest, description = "JSON or URL-encoded form"),
    responses(
        (status = 200, description = "\"success\" or \"incorrect password\"", body = String),
        (
            status = 404,
            description = "Thread or reply not found",
            body = crate::web::error::ErrorBody
        )
    )
)]
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
    ValidatedPayload(req): ValidatedPayload<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = req.thread_id.unwrap_or_default();
    let reply_id = req.reply_id.unwrap_or_default();

    let service = BoardService::new(&state.db);
    let outcome = service
        .delete_reply(&board, &thread_id, &reply_id, &req.delete_password)
        .await?;

    Ok(outcome.as_str())
}
