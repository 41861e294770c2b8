//! SQLite persistence.
//!
//! - [`database`] - Pool construction and embedded migrations
//! - [`SqliteTaskRepository`] - Task storage and retrieval

pub mod database;
pub mod sqlite_task_repository;

pub use sqlite_task_repository::SqliteTaskRepository;
