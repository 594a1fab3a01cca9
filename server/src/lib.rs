//! HTTP surface for the todo server.
//!
//! # Design
//! Handlers extract typed parameters (`Path<Uuid>`, `Form`, `Query`), call
//! the [`TodoService`], and respond with maud fragments; every success body
//! is `text/html`. [`AppError`] is the single place where core error kinds
//! become status codes — 422 for validation, 404 for unknown ids, 500 for
//! storage failures (logged, never echoed). Malformed ids and filter
//! values are rejected by the extractors as 400 before any dispatch.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Form, Router,
};
use maud::{html, Markup};
use serde::Deserialize;
use todo_core::{render, TodoError, TodoService, TodoStore, ViewFilter};
use tokio::net::TcpListener;
use uuid::Uuid;

mod page;

/// Builds the application router over the given store.
pub fn app(store: TodoStore) -> Router {
    let service = TodoService::new(store);
    Router::new()
        .route("/", get(index))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/completed", delete(clear_completed))
        .route("/todos/toggle-all", post(toggle_all))
        .route("/todos/{id}", patch(edit_todo).delete(delete_todo))
        .route("/todos/{id}/toggle", patch(toggle_todo))
        .with_state(service)
}

/// Serves [`app`] on the listener until the process exits.
pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Maps core errors onto status codes and error fragments.
struct AppError(TodoError);

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            TodoError::Validation(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                render::render_error(&reason),
            )
                .into_response(),
            TodoError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                render::render_error(&format!("no todo with id {id}")),
            )
                .into_response(),
            TodoError::Storage(detail) => {
                log::error!("storage failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render::render_error("internal server error"),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(default)]
    filter: ViewFilter,
}

#[derive(Deserialize)]
struct TitleForm {
    title: String,
}

async fn index(State(service): State<TodoService>) -> Result<Markup, AppError> {
    let view = service.list(ViewFilter::All).await?;
    Ok(page::index(&view))
}

async fn list_todos(
    State(service): State<TodoService>,
    Query(params): Query<ListParams>,
) -> Result<Markup, AppError> {
    let view = service.list(params.filter).await?;
    Ok(render::render_list_view(&view))
}

async fn create_todo(
    State(service): State<TodoService>,
    Form(form): Form<TitleForm>,
) -> Result<(StatusCode, Markup), AppError> {
    let view = service.create(&form.title).await?;
    Ok((StatusCode::CREATED, render::render_list_view(&view)))
}

async fn toggle_todo(
    State(service): State<TodoService>,
    Path(id): Path<Uuid>,
) -> Result<Markup, AppError> {
    let (item, remaining) = service.toggle(id).await?;
    Ok(html! {
        (render::render_item(&item))
        (render::render_count(remaining, true))
    })
}

async fn edit_todo(
    State(service): State<TodoService>,
    Path(id): Path<Uuid>,
    Form(form): Form<TitleForm>,
) -> Result<Markup, AppError> {
    let item = service.edit(id, &form.title).await?;
    Ok(render::render_item(&item))
}

async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<Uuid>,
) -> Result<Markup, AppError> {
    let remaining = service.delete(id).await?;
    // The primary swap region stays empty so the client removes the
    // element; the count rides along out of band.
    Ok(render::render_count(remaining, true))
}

async fn clear_completed(State(service): State<TodoService>) -> Result<Markup, AppError> {
    let view = service.clear_completed().await?;
    Ok(render::render_list_view(&view))
}

async fn toggle_all(State(service): State<TodoService>) -> Result<Markup, AppError> {
    let view = service.toggle_all().await?;
    Ok(render::render_list_view(&view))
}
