//! DTOs for the task endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewTask, Task, TaskStatus, UnknownStatus};
use crate::error::AppError;

pub const TITLE_MAX_CHARS: u64 = 100;
pub const DESCRIPTION_MAX_CHARS: u64 = 2000;

/// Request body for `POST /api/tasks`.
///
/// `status` and `due_date` are taken as raw strings so that an unknown status
/// literal or a malformed timestamp is reported against its own field rather
/// than as an unreadable body. A missing or `null` status means `todo`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be 2000 characters or fewer"))]
    pub description: Option<String>,

    #[validate(
        required(message = "Due date is required"),
        custom(function = "validate_due_date")
    )]
    pub due_date: Option<String>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

impl TryFrom<CreateTaskRequest> for NewTask {
    type Error = AppError;

    fn try_from(req: CreateTaskRequest) -> Result<Self, Self::Error> {
        let due_date = req
            .due_date
            .as_deref()
            .ok_or_else(|| AppError::invalid_field("due_date", "Due date is required"))
            .and_then(parse_due_date)?;

        let status = match req.status.as_deref() {
            Some(raw) => raw
                .parse()
                .map_err(|e: UnknownStatus| AppError::invalid_field("status", e.to_string()))?,
            None => TaskStatus::default(),
        };

        Ok(NewTask {
            title: req.title,
            description: req.description,
            due_date,
            status,
        })
    }
}

fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| AppError::invalid_field("due_date", DUE_DATE_FORMAT_MESSAGE))
}

const DUE_DATE_FORMAT_MESSAGE: &str =
    "Due date must be an RFC 3339 timestamp with an offset, e.g. 2030-01-01T09:00:00Z";

fn validate_title(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Title must not be blank".into());
        return Err(err);
    }
    if value.chars().any(char::is_control) {
        let mut err = ValidationError::new("control_character");
        err.message = Some("Title must not contain control characters".into());
        return Err(err);
    }
    Ok(())
}

fn validate_due_date(value: &str) -> Result<(), ValidationError> {
    if DateTime::parse_from_rfc3339(value).is_err() {
        let mut err = ValidationError::new("datetime");
        err.message = Some(DUE_DATE_FORMAT_MESSAGE.into());
        return Err(err);
    }
    Ok(())
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    if let Err(e) = value.parse::<TaskStatus>() {
        let mut err = ValidationError::new("status");
        err.message = Some(e.to_string().into());
        return Err(err);
    }
    Ok(())
}

/// JSON representation of a stored task.
///
/// `description` is always serialized, as `null` when absent.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        TaskResponse {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
            created_at: task.created_at,
        }
    }
}
