//! threadboard - anonymous message board backend
//!
//! Boards hold threads, threads hold replies. Every thread is stored as one
//! document in SQLite and served over a small JSON/form HTTP API.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{
    BoardService, DeleteOutcome, NewReply, NewThread, Projection, Reply, Thread, ThreadSummary,
};
pub use config::Config;
pub use db::Database;
pub use error::{BoardError, Result};
pub use web::WebServer;
