//! Task creation, retrieval, and deletion service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewTask, Task, TaskStatus};
use crate::domain::repositories::TaskRepository;
use crate::error::AppError;

/// Service wrapping the task repository with the creation policy and
/// not-found handling.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
    require_future_due_date: bool,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a new task service.
    ///
    /// When `require_future_due_date` is set, tasks can only be created with a
    /// due date at or after the current instant.
    pub fn new(repository: Arc<R>, require_future_due_date: bool) -> Self {
        Self {
            repository,
            require_future_due_date,
        }
    }

    /// Stores a new task.
    ///
    /// Field shape (title, description) is checked by the request DTO; this
    /// method only applies the due-date policy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the due date is in the past and the
    /// policy is enabled.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_task(&self, new_task: NewTask) -> Result<Task, AppError> {
        if self.require_future_due_date && new_task.due_date < Utc::now() {
            return Err(AppError::invalid_field(
                "due_date",
                "Due date must be now or in the future",
            ));
        }

        let task = self.repository.create(new_task).await?;
        tracing::info!(task_id = task.id, status = %task.status, "Task created");

        Ok(task)
    }

    /// Lists all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no task has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_task(&self, id: i64) -> Result<Task, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| task_not_found(id))
    }

    /// Hard-deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no task has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_task(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(task_not_found(id));
        }

        tracing::info!(task_id = id, "Task deleted");
        Ok(())
    }

    /// Returns the number of tasks per status, including zero counts.
    pub async fn status_counts(&self) -> Result<Vec<(TaskStatus, i64)>, AppError> {
        let counts = self.repository.count_by_status().await?;

        Ok(TaskStatus::ALL
            .iter()
            .map(|status| {
                let count = counts
                    .iter()
                    .find(|(s, _)| s == status)
                    .map_or(0, |(_, c)| *c);
                (*status, count)
            })
            .collect())
    }

    /// Checks that the store answers queries.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn task_not_found(id: i64) -> AppError {
    AppError::not_found("Task not found", json!({ "id": id }))
}
