//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_task.rs` for usage examples.

pub mod task_repository;

pub use task_repository::TaskRepository;

#[cfg(test)]
pub use task_repository::MockTaskRepository;
