//! Command layer between the router and the store.
//!
//! # Design
//! One method per user command, each returning exactly the data its
//! fragment needs: list-shaped commands return a [`ListView`], item-shaped
//! commands return the touched item (plus the remaining count where the
//! footer must update). Store errors pass through unchanged — this layer
//! adds no error kinds of its own.

use log::debug;
use uuid::Uuid;

use crate::error::TodoError;
use crate::store::{TodoMutation, TodoStore};
use crate::types::{ListView, TodoItem, ViewFilter};

/// Translates one user command into store operations.
#[derive(Clone)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Current list under `filter`.
    pub async fn list(&self, filter: ViewFilter) -> Result<ListView, TodoError> {
        Ok(ListView::new(self.store.list().await?, filter))
    }

    /// Creates an item and returns the refreshed full list, so one swap of
    /// the list container keeps items, count, and footer consistent.
    pub async fn create(&self, title: &str) -> Result<ListView, TodoError> {
        let item = self.store.insert(title).await?;
        debug!("created todo {}", item.id);
        self.list(ViewFilter::All).await
    }

    /// Flips one item's completed flag; returns the item and the remaining
    /// count for the out-of-band footer update.
    pub async fn toggle(&self, id: Uuid) -> Result<(TodoItem, usize), TodoError> {
        let item = self.store.update(id, TodoMutation::ToggleCompleted).await?;
        let remaining = self.store.remaining().await?;
        Ok((item, remaining))
    }

    /// Replaces one item's title.
    pub async fn edit(&self, id: Uuid, title: &str) -> Result<TodoItem, TodoError> {
        self.store
            .update(id, TodoMutation::SetTitle(title.to_string()))
            .await
    }

    /// Deletes one item; returns the remaining count.
    pub async fn delete(&self, id: Uuid) -> Result<usize, TodoError> {
        self.store.delete(id).await?;
        self.store.remaining().await
    }

    /// Removes all completed items and returns the refreshed full list.
    pub async fn clear_completed(&self) -> Result<ListView, TodoError> {
        let removed = self.store.delete_completed().await?;
        debug!("clear-completed removed {removed} todos");
        self.list(ViewFilter::All).await
    }

    /// Marks everything completed, or everything active when nothing is
    /// left to complete; returns the refreshed full list.
    pub async fn toggle_all(&self) -> Result<ListView, TodoError> {
        self.store.toggle_all().await?;
        self.list(ViewFilter::All).await
    }
}
