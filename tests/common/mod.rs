#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use task_manager::infrastructure::persistence::database;
use task_manager::routes::{app_router, router};
use task_manager::state::AppState;

/// Fresh in-memory database with migrations applied.
pub async fn test_pool() -> SqlitePool {
    let pool = database::connect_in_memory().await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    pool
}

pub fn create_test_state(pool: SqlitePool, require_future_due_date: bool) -> AppState {
    AppState::new(Arc::new(pool), require_future_due_date)
}

/// Test server over the full router with the future-due-date policy enabled.
pub async fn make_server() -> TestServer {
    make_server_with_policy(true).await
}

pub async fn make_server_with_policy(require_future_due_date: bool) -> TestServer {
    let state = create_test_state(test_pool().await, require_future_due_date);
    TestServer::new(router(state)).unwrap()
}

/// Test server over the production service, trailing-slash normalization included.
pub async fn make_app_server() -> TestServer {
    let state = create_test_state(test_pool().await, true);
    let service = axum::ServiceExt::<axum::extract::Request>::into_make_service(app_router(state));
    TestServer::new(service).unwrap()
}

pub fn tomorrow() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

pub fn yesterday() -> DateTime<Utc> {
    Utc::now() - Duration::days(1)
}

pub async fn insert_raw_task(pool: &SqlitePool, title: &str, status: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tasks (title, due_date, status, created_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(title)
    .bind(tomorrow())
    .bind(status)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}
