//! # Task Manager
//!
//! A small task-management REST API built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Task` entity and repository trait
//! - **Application Layer** ([`application`]) - Task service and creation policy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://tasks.db?mode=rwc"   # optional, this is the default
//! cargo run
//!
//! curl -X POST localhost:8000/api/tasks \
//!   -H 'content-type: application/json' \
//!   -d '{"title":"Write report","due_date":"2030-01-01T09:00:00Z"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for integration tests and the admin binary.
pub mod prelude {
    pub use crate::application::services::TaskService;
    pub use crate::domain::entities::{NewTask, Task, TaskStatus};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
