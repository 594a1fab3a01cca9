//! Domain model for the todo list.
//!
//! # Design
//! These types are what flows between the store, the service, and the
//! renderer. The request-facing `ViewFilter` derives `Deserialize` so the
//! server crate can pull it straight out of a `filter` query parameter;
//! everything else stays serde-free because no structured-data contract
//! exists — state leaves the server only as rendered markup.

use serde::Deserialize;
use uuid::Uuid;

/// A single todo item as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Opaque identity, assigned at creation, never reused.
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    /// Unix milliseconds at creation. Immutable; only used for stable
    /// default ordering (ties broken by `id`).
    pub created_at: i64,
}

/// Which subset of the list a view shows. Derived from the request, never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ViewFilter {
    /// Footer filter links, in display order.
    pub const VARIANTS: [ViewFilter; 3] =
        [ViewFilter::All, ViewFilter::Active, ViewFilter::Completed];

    /// Whether `item` belongs to the subset this filter shows.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Active => !item.completed,
            ViewFilter::Completed => item.completed,
        }
    }

    /// Human label shown on the footer link.
    pub fn label(self) -> &'static str {
        match self {
            ViewFilter::All => "All",
            ViewFilter::Active => "Active",
            ViewFilter::Completed => "Completed",
        }
    }

    /// Value carried in `filter` query parameters.
    pub fn query_value(self) -> &'static str {
        match self {
            ViewFilter::All => "all",
            ViewFilter::Active => "active",
            ViewFilter::Completed => "completed",
        }
    }
}

/// Everything one list render needs: the full item sequence, the filter to
/// apply, and the remaining (active) count.
#[derive(Debug, Clone)]
pub struct ListView {
    pub items: Vec<TodoItem>,
    pub filter: ViewFilter,
    pub remaining: usize,
}

impl ListView {
    pub fn new(items: Vec<TodoItem>, filter: ViewFilter) -> Self {
        let remaining = items.iter().filter(|item| !item.completed).count();
        Self {
            items,
            filter,
            remaining,
        }
    }
}
