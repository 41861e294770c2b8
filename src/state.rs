//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::TaskService;
use crate::infrastructure::persistence::SqliteTaskRepository;

/// Handles shared by every request.
///
/// Built once at startup from an explicitly opened pool; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub task_service: Arc<TaskService<SqliteTaskRepository>>,
}

impl AppState {
    pub fn new(pool: Arc<SqlitePool>, require_future_due_date: bool) -> Self {
        let task_repository = Arc::new(SqliteTaskRepository::new(pool));

        Self {
            task_service: Arc::new(TaskService::new(task_repository, require_future_due_date)),
        }
    }
}
