//! Task API endpoints
//!
//! JSON API mirroring the store operations, for callers that are not the
//! HTML UI. The store treats missing targets as no-ops; mapping them to
//! 404 here is this surface's choice.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tl_core::task::{StatusFilter, Task, TaskRepository, TaskStatus, TIMESTAMP_FORMAT};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: u64,
    pub text: String,
    pub status: TaskStatus,
    pub created_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            status: task.status,
            created_at: task.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(e: tl_core::Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn not_found(id: u64) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Task {} not found", id),
        }),
    )
}

fn empty_text() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Text cannot be empty".to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List tasks, optionally filtered by status
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state
        .task_store()
        .find_by_status(query.status)
        .await
        .map_err(internal_error)?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(empty_text());
    }

    let created = state
        .task_store()
        .create(text.to_string())
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// GET /api/tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.task_store().get(id).await.map_err(internal_error)?;

    match task {
        Some(t) => Ok(Json(TaskResponse::from(t))),
        None => Err(not_found(id)),
    }
}

/// PATCH /api/tasks/{id} - Replace a task's text
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(empty_text());
    }

    let updated = state
        .task_store()
        .update_text(id, text.to_string())
        .await
        .map_err(internal_error)?;

    if !updated {
        return Err(not_found(id));
    }

    let task = state.task_store().get(id).await.map_err(internal_error)?;
    task.map(|t| Json(TaskResponse::from(t)))
        .ok_or_else(|| not_found(id))
}

/// POST /api/tasks/{id}/toggle - Flip a task's status
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let toggled = state
        .task_store()
        .toggle_status(id)
        .await
        .map_err(internal_error)?;

    if !toggled {
        return Err(not_found(id));
    }

    let task = state.task_store().get(id).await.map_err(internal_error)?;
    task.map(|t| Json(TaskResponse::from(t)))
        .ok_or_else(|| not_found(id))
}

/// DELETE /api/tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .task_store()
        .delete(id)
        .await
        .map_err(internal_error)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/toggle", post(toggle_task))
}
