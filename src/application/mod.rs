//! Application layer services.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! - [`services::task_service::TaskService`] - Task lifecycle and creation policy

pub mod services;
