//! Web API module for threadboard.
//!
//! This module serves the board over HTTP: thread and reply endpoints under
//! `/api`, a health check, and an OpenAPI document with Swagger UI.

pub mod docs;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
