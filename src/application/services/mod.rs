//! Business logic services for the application layer.

pub mod task_service;

pub use task_service::TaskService;
