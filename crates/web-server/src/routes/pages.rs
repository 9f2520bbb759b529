//! Server-rendered task list pages
//!
//! Every mutation is a form POST followed by a redirect back to `/`, where
//! the full list is re-read from the store and re-rendered. Validation of
//! user input (non-empty text) happens here, before the store is touched.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use tl_core::task::{StatusFilter, Task, TaskRepository};

use crate::state::AppState;

/// Error type for page handlers. Store and template failures both surface
/// as a plain 500; not-found targets never reach this type.
#[derive(Debug, thiserror::Error)]
enum PageError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    Store(#[from] tl_core::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("page handler failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong. Please try again later.",
        )
            .into_response()
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    tasks: Vec<Task>,
    filter: StatusFilter,
    warning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    filter: StatusFilter,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TaskTextForm {
    text: String,
    #[serde(default)]
    filter: StatusFilter,
}

/// Form carrying only the active filter, so mutations can redirect back to
/// the view the user was on.
#[derive(Debug, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    filter: StatusFilter,
}

fn back_to_list(filter: StatusFilter) -> Redirect {
    Redirect::to(&format!("/?filter={}", filter.as_str()))
}

fn back_with_empty_warning(filter: StatusFilter) -> Redirect {
    Redirect::to(&format!("/?filter={}&error=empty", filter.as_str()))
}

/// GET / - Render the task list for the selected filter
async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let tasks = state.task_store().find_by_status(query.filter).await?;
    let warning = match query.error.as_deref() {
        Some("empty") => Some("Please enter a task before saving!".to_string()),
        _ => None,
    };

    let template = IndexTemplate {
        tasks,
        filter: query.filter,
        warning,
    };
    Ok(Html(template.render()?))
}

/// POST /tasks - Add a new task, then re-render
async fn create_task(
    State(state): State<AppState>,
    Form(form): Form<TaskTextForm>,
) -> Result<Redirect, PageError> {
    let text = form.text.trim();
    if text.is_empty() {
        // Rejected at the boundary; the store never sees empty text.
        return Ok(back_with_empty_warning(form.filter));
    }

    state.task_store().create(text.to_string()).await?;
    Ok(back_to_list(form.filter))
}

/// POST /tasks/{id}/toggle - Flip a task's status, then re-render
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<FilterForm>,
) -> Result<Redirect, PageError> {
    // A missing id is a benign no-op; the redirect happens either way.
    state.task_store().toggle_status(id).await?;
    Ok(back_to_list(form.filter))
}

/// POST /tasks/{id}/edit - Replace a task's text, then re-render
async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<TaskTextForm>,
) -> Result<Redirect, PageError> {
    let text = form.text.trim();
    if text.is_empty() {
        return Ok(back_with_empty_warning(form.filter));
    }

    state.task_store().update_text(id, text.to_string()).await?;
    Ok(back_to_list(form.filter))
}

/// POST /tasks/{id}/delete - Remove a task, then re-render
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<FilterForm>,
) -> Result<Redirect, PageError> {
    state.task_store().delete(id).await?;
    Ok(back_to_list(form.filter))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/tasks", post(create_task))
        .route("/tasks/{id}/toggle", post(toggle_task))
        .route("/tasks/{id}/edit", post(edit_task))
        .route("/tasks/{id}/delete", post(delete_task))
}
