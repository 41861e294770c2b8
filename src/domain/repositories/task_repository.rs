//! Repository trait for task data access.

use crate::domain::entities::{NewTask, Task, TaskStatus};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the task store.
///
/// Every method touches at most one row, so there are no partial-failure
/// cases to model.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteTaskRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a task, assigning its `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_task: NewTask) -> Result<Task, AppError>;

    /// Returns every stored task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Task>, AppError>;

    /// Finds a task by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Task))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;

    /// Hard-deletes a task.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no task has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts tasks grouped by status. Statuses with no tasks are omitted.
    async fn count_by_status(&self) -> Result<Vec<(TaskStatus, i64)>, AppError>;

    /// Performs a trivial round trip to the store.
    async fn ping(&self) -> Result<(), AppError>;
}
