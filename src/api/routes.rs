//! API route configuration.

use crate::api::handlers::{
    create_task_handler, delete_task_handler, get_task_handler, list_tasks_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Task routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /tasks`        - List all tasks
/// - `POST   /tasks`        - Create a task
/// - `GET    /tasks/{id}`   - Fetch a task
/// - `DELETE /tasks/{id}`   - Delete a task
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler).delete(delete_task_handler),
        )
}
