//! Thread handlers for the board API.

use axum::{
    extract::State,
    http::HeaderMap,
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, NewThread};
use crate::web::dto::{
    ApiPath, CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ThreadResponse,
    ValidatedPayload,
};
use crate::web::error::ApiError;
use crate::web::handlers::{redirect_back, AppState};

/// GET /api/threads/:board - List the most recently bumped threads.
#[utoipa::path(
    get,
    path = "/api/threads/{board}",
    tag = "threads",
    params(
        ("board" = String, Path, description = "Board name")
    ),
    responses(
        (
            status = 200,
            description = "Up to 10 threads with their 3 newest replies",
            body = Vec<ThreadResponse>
        ),
        (status = 500, description = "Storage failure", body = crate::web::error::ErrorBody)
    )
)]
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
) -> Result<Json<Vec<ThreadResponse>>, ApiError> {
    let service = BoardService::new(&state.db);
    let threads = service.list_threads(&board).await?;

    Ok(Json(threads.into_iter().map(Into::into).collect()))
}

/// POST /api/threads/:board - Start a new thread.
#[utoipa::path(
    post,
    path = "/api/threads/{board}",
    tag = "threads",
    params(
        ("board" = String, Path, description = "Board name")
    ),
    request_body(content = CreateThreadRequest, description = "JSON or URL-encoded form"),
    responses(
        (status = 303, description = "Thread created; redirect to the referring page or the board"),
        (
            status = 400,
            description = "Missing text or delete_password",
            body = crate::web::error::ErrorBody
        )
    )
)]
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
    headers: HeaderMap,
    ValidatedPayload(req): ValidatedPayload<CreateThreadRequest>,
) -> Result<Redirect, ApiError> {
    let new_thread = NewThread::new(
        req.text.unwrap_or_default(),
        req.delete_password.unwrap_or_default(),
    );

    let service = BoardService::new(&state.db);
    service.create_thread(&board, &new_thread).await?;

    Ok(redirect_back(&headers, format!("/b/{board}/")))
}

/// PUT /api/threads/:board - Report a thread.
#[utoipa::path(
    put,
    path = "/api/threads/{board}",
    tag = "threads",
    params(
        ("board" = String, Path, description = "Board name")
    ),
    request_body(content = ReportThreadRequest, description = "JSON or URL-encoded form"),
    responses(
        (status = 200, description = "Thread reported", body = String, example = json!("reported")),
        (status = 404, description = "Thread not found", body = crate::web::error::ErrorBody)
    )
)]
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
    ValidatedPayload(req): ValidatedPayload<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = req
        .target()
        .ok_or_else(|| ApiError::bad_request("thread_id or report_id is required"))?;

    let service = BoardService::new(&state.db);
    service.report_thread(&board, thread_id).await?;

    Ok("reported")
}

/// DELETE /api/threads/:board - Delete a thread with its password.
#[utoipa::path(
    delete,
    path = "/api/threads/{board}",
    tag = "threads",
    params(
        ("board" = String, Path, description = "Board name")
    ),
    request_body(content = DeleteThreadRequest, description = "JSON or URL-encoded form"),
    responses(
        (status = 200, description = "\"success\" or \"incorrect password\"", body = String),
        (status = 404, description = "Thread not found", body = crate::web::error::ErrorBody)
    )
)]
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    ApiPath(board): ApiPath<String>,
    ValidatedPayload(req): ValidatedPayload<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = req.thread_id.unwrap_or_default();

    let service = BoardService::new(&state.db);
    let outcome = service
        .delete_thread(&board, &thread_id, &req.delete_password)
        .await?;

    Ok(outcome.as_str())
}
