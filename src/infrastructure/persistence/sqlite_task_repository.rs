//! SQLite implementation of the task repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewTask, Task, TaskStatus};
use crate::domain::repositories::TaskRepository;
use crate::error::AppError;

const TASK_COLUMNS: &str = "id, title, description, due_date, status, created_at";

/// SQLite repository for task storage and retrieval.
pub struct SqliteTaskRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTaskRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    description: Option<String>,
    due_date: DateTime<Utc>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = AppError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<TaskStatus>().map_err(|e| {
            AppError::internal(
                "Corrupt task row",
                json!({ "id": row.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Task::new(
            row.id,
            row.title,
            row.description,
            row.due_date,
            status,
            row.created_at,
        ))
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, new_task: NewTask) -> Result<Task, AppError> {
        let mut conn = self.pool.acquire().await?;

        let row: TaskRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO tasks (title, description, due_date, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(&new_task.title)
        .bind(&new_task.description)
        .bind(new_task.due_date)
        .bind(new_task.status.as_str())
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        row.try_into()
    }

    async fn list(&self) -> Result<Vec<Task>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let rows: Vec<TaskRow> =
            sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"))
                .fetch_all(&mut *conn)
                .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let row: Option<TaskRow> =
            sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?"))
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        row.map(Task::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_status(&self) -> Result<Vec<(TaskStatus, i64)>, AppError> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM tasks GROUP BY status ORDER BY status")
                .fetch_all(self.pool.as_ref())
                .await?;

        rows.into_iter()
            .map(|(status, count)| {
                let status = status.parse::<TaskStatus>().map_err(|e| {
                    AppError::internal("Corrupt task row", json!({ "reason": e.to_string() }))
                })?;
                Ok((status, count))
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
