//! Core domain entities.
//!
//! The service manages a single entity, [`Task`]. Insertion input is the
//! separate [`NewTask`] struct so that `id` and `created_at` can only be
//! assigned by the store.

pub mod task;

pub use task::{NewTask, Task, TaskStatus, UnknownStatus};
