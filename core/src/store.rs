//! SQLite-backed item store.
//!
//! # Design
//! A single `rusqlite::Connection` behind a `tokio::sync::Mutex`, handed to
//! the store at construction — no ambient database access anywhere else.
//! Every public method takes the lock once and runs its statements under
//! it, so each operation appears atomic to concurrent callers: two toggles
//! on the same id cannot interleave, a delete racing a toggle resolves to
//! either delete-wins or toggle-then-not-found, and `list` never observes a
//! half-applied write. Waiting on the lock suspends the calling task
//! without blocking other tasks.
//!
//! Title validation happens before any SQL mutation; a rejected write
//! leaves the store untouched.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::TodoError;
use crate::types::TodoItem;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS todos (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL
)";

const LIST_SQL: &str =
    "SELECT id, title, completed, created_at FROM todos ORDER BY created_at ASC, id ASC";

const GET_SQL: &str = "SELECT id, title, completed, created_at FROM todos WHERE id = ?1";

/// Mutation applied by [`TodoStore::update`].
#[derive(Debug, Clone)]
pub enum TodoMutation {
    /// Replace the title. Rejected when the new title trims to empty.
    SetTitle(String),
    SetCompleted(bool),
    /// Flip `completed` in a single statement. Dedicated variant so two
    /// concurrent toggles can never read the same prior value and lose an
    /// update.
    ToggleCompleted,
}

/// Durable mapping from item identity to todo state.
///
/// Cheap to clone; clones share the same underlying connection.
#[derive(Clone)]
pub struct TodoStore {
    conn: Arc<Mutex<Connection>>,
}

impl TodoStore {
    /// Opens (creating if needed) a file-backed store and bootstraps the
    /// schema. The WAL journal keeps mutations durable once a call returns.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TodoError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "wal")?;
        Self::bootstrap(conn)
    }

    /// In-memory store for tests and ephemeral runs.
    pub fn open_in_memory() -> Result<Self, TodoError> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self, TodoError> {
        conn.execute(SCHEMA_SQL, [])?;
        info!("todo store ready");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Creates a new item with `completed = false` and returns it.
    pub async fn insert(&self, title: &str) -> Result<TodoItem, TodoError> {
        let title = validated_title(title)?;
        let item = TodoItem {
            id: Uuid::new_v4(),
            title,
            completed: false,
            created_at: Utc::now().timestamp_millis(),
        };
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO todos (id, title, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                item.id.to_string(),
                item.title,
                item.completed,
                item.created_at
            ],
        )?;
        Ok(item)
    }

    pub async fn get(&self, id: Uuid) -> Result<TodoItem, TodoError> {
        let conn = self.conn.lock().await;
        fetch(&conn, id)
    }

    /// All items, ascending `created_at` with ties broken by `id`. An empty
    /// store yields an empty vec.
    pub async fn list(&self) -> Result<Vec<TodoItem>, TodoError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(LIST_SQL)?;
        let rows = stmt.query_map([], item_from_row)?;
        let mut items = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }

    /// Applies one mutation and returns the updated item.
    pub async fn update(&self, id: Uuid, mutation: TodoMutation) -> Result<TodoItem, TodoError> {
        let conn = self.conn.lock().await;
        let changed = match mutation {
            TodoMutation::SetTitle(title) => {
                let title = validated_title(&title)?;
                conn.execute(
                    "UPDATE todos SET title = ?1 WHERE id = ?2",
                    params![title, id.to_string()],
                )?
            }
            TodoMutation::SetCompleted(completed) => conn.execute(
                "UPDATE todos SET completed = ?1 WHERE id = ?2",
                params![completed, id.to_string()],
            )?,
            TodoMutation::ToggleCompleted => conn.execute(
                "UPDATE todos SET completed = NOT completed WHERE id = ?1",
                params![id.to_string()],
            )?,
        };
        if changed == 0 {
            return Err(TodoError::NotFound(id));
        }
        fetch(&conn, id)
    }

    /// Permanently removes an item. Repeating the delete after the first
    /// success fails with `NotFound` again — removal is not idempotent.
    pub async fn delete(&self, id: Uuid) -> Result<(), TodoError> {
        let conn = self.conn.lock().await;
        let removed = conn.execute("DELETE FROM todos WHERE id = ?1", params![id.to_string()])?;
        if removed == 0 {
            return Err(TodoError::NotFound(id));
        }
        Ok(())
    }

    /// Removes every completed item and returns how many were removed.
    pub async fn delete_completed(&self) -> Result<usize, TodoError> {
        let conn = self.conn.lock().await;
        let removed = conn.execute("DELETE FROM todos WHERE completed = 1", [])?;
        if removed > 0 {
            debug!("cleared {removed} completed todos");
        }
        Ok(removed)
    }

    /// Number of items still active.
    pub async fn remaining(&self) -> Result<usize, TodoError> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM todos WHERE completed = 0", [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }

    /// Marks every item completed while any is still active, otherwise
    /// marks every item active. Returns the affected row count. Both
    /// statements run under one lock acquisition, so the decision and the
    /// update are atomic to concurrent callers.
    pub async fn toggle_all(&self) -> Result<usize, TodoError> {
        let conn = self.conn.lock().await;
        let any_active: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM todos WHERE completed = 0)",
            [],
            |row| row.get(0),
        )?;
        let changed = conn.execute(
            "UPDATE todos SET completed = ?1 WHERE completed = ?2",
            params![any_active, !any_active],
        )?;
        Ok(changed)
    }
}

fn fetch(conn: &Connection, id: Uuid) -> Result<TodoItem, TodoError> {
    conn.query_row(GET_SQL, params![id.to_string()], item_from_row)
        .optional()?
        .ok_or(TodoError::NotFound(id))
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
    let raw_id: String = row.get(0)?;
    let id = Uuid::parse_str(&raw_id).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(TodoItem {
        id,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Trims the title; empty or whitespace-only input is rejected.
fn validated_title(raw: &str) -> Result<String, TodoError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TodoError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}
