//! Repository Module
//!
//! CRUD and aggregate queries over the SQLite store. Missing rows are
//! values (`Option` / `bool`), never errors — only store faults become
//! [`RepoError`].

pub mod employee;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
