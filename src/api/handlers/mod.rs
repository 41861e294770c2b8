//! HTTP request handlers for API endpoints.

pub mod health;
pub mod tasks;

pub use health::{banner_handler, health_handler};
pub use tasks::{create_task_handler, delete_task_handler, get_task_handler, list_tasks_handler};
