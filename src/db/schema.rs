//! Database schema and migrations for threadboard.
//!
//! Migrations are applied in order when the database is opened. The
//! schema_version table records which ones have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: Document table. Every board is a namespace inside it.
    r#"
CREATE TABLE documents (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,  -- insertion order
    board       TEXT NOT NULL,
    id          TEXT NOT NULL,
    bumped_on   TEXT NOT NULL,           -- RFC 3339, fixed width, sortable
    version     INTEGER NOT NULL DEFAULT 0,
    body        TEXT NOT NULL,           -- JSON thread document
    UNIQUE (board, id)
);
"#,
];
