//! Handlers for task endpoints (create, list, fetch, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::task::{CreateTaskRequest, TaskResponse};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::NewTask;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a task.
///
/// # Endpoint
///
/// `POST /api/tasks`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Write report",
///   "description": "Quarterly numbers",  // optional
///   "due_date": "2026-12-31T17:00:00Z",
///   "status": "todo"                    // optional or null, default "todo"
/// }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body is malformed or fails validation.
/// Field failures (including an unknown `status` or a `due_date` that is not
/// RFC 3339) are listed per field under `details`.
pub async fn create_task_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let task = state.task_service.create_task(NewTask::try_from(payload)?).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Lists all tasks.
///
/// # Endpoint
///
/// `GET /api/tasks`
///
/// Returns an empty array when the store is empty.
pub async fn list_tasks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = state.task_service.list_tasks().await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Fetches a single task.
///
/// # Endpoint
///
/// `GET /api/tasks/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no task has this id.
pub async fn get_task_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = state.task_service.get_task(id).await?;

    Ok(Json(task.into()))
}

/// Permanently deletes a task.
///
/// # Endpoint
///
/// `DELETE /api/tasks/{id}`
///
/// Responds 204 No Content with an empty body. There is no soft delete; a
/// subsequent fetch of the same id returns 404.
///
/// # Errors
///
/// Returns 404 Not Found if no task has this id.
pub async fn delete_task_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.task_service.delete_task(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
