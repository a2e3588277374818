//! API handlers for the board.

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

use axum::{
    http::{header::REFERER, HeaderMap, HeaderValue},
    response::Redirect,
};

use crate::db::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store.
    pub db: Database,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Send the client back where the post came from, or to `fallback`.
fn redirect_back(headers: &HeaderMap, fallback: String) -> Redirect {
    let target = headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or(fallback);
    // Board names and thread IDs come from the client.
    if HeaderValue::from_str(&target).is_err() {
        return Redirect::to("/");
    }
    Redirect::to(&target)
}
