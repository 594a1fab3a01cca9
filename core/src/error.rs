//! Error taxonomy for the todo core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the router maps it straight
//! to 404, while `Validation` carries a user-correctable message rendered
//! into a 422 fragment. SQLite failures land in `Storage` as a stringified
//! detail so the public surface stays free of rusqlite types; the router
//! logs the detail and answers 500 without echoing it to the client.

use std::fmt;

use uuid::Uuid;

/// Errors surfaced by the item store and passed through the service
/// unchanged. The server crate is the only layer that maps these onto
/// HTTP statuses.
#[derive(Debug)]
pub enum TodoError {
    /// Bad input shape or content — the title was empty after trimming.
    Validation(String),

    /// The referenced todo does not exist in the store.
    NotFound(Uuid),

    /// The underlying SQLite operation failed.
    Storage(String),
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoError::Validation(reason) => write!(f, "invalid input: {reason}"),
            TodoError::NotFound(id) => write!(f, "todo not found: {id}"),
            TodoError::Storage(detail) => write!(f, "storage failure: {detail}"),
        }
    }
}

impl std::error::Error for TodoError {}

impl From<rusqlite::Error> for TodoError {
    fn from(err: rusqlite::Error) -> Self {
        TodoError::Storage(err.to_string())
    }
}
