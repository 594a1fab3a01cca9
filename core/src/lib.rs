//! Domain core for the hypermedia todo server.
//!
//! # Overview
//! Everything below the HTTP router lives here: the SQLite-backed item
//! store, the command layer that turns user actions into store operations,
//! and the pure fragment renderer. The server crate wires these to axum
//! and owns status codes; this crate owns state and markup.
//!
//! # Design
//! - `TodoStore` guards one connection with an async mutex, so every store
//!   operation appears atomic to concurrent requests.
//! - `render` is a pure function from state to markup — identical input,
//!   byte-identical output — which is what keeps server-rendered fragments
//!   consistent with persisted state.
//! - `TodoError` is the only error surface; the router maps its variants
//!   to HTTP statuses, nothing in this crate knows about HTTP.

pub mod error;
pub mod render;
pub mod service;
pub mod store;
pub mod types;

pub use error::TodoError;
pub use service::TodoService;
pub use store::{TodoMutation, TodoStore};
pub use types::{ListView, TodoItem, ViewFilter};
