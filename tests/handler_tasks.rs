mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_task_success() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({
            "title": "Test Task",
            "description": "Test Description",
            "due_date": common::tomorrow(),
            "status": "todo"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["title"], "Test Task");
    assert_eq!(body["description"], "Test Description");
    assert_eq!(body["status"], "todo");
    assert!(body["created_at"].is_string());
    assert!(body["due_date"].is_string());
}

#[tokio::test]
async fn test_create_task_defaults() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({ "title": "Minimal", "due_date": common::tomorrow() }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["status"], "todo");
    assert!(body.get("description").is_some());
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn test_create_task_with_explicit_status() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({
            "title": "Started",
            "due_date": common::tomorrow(),
            "status": "in_progress"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["status"], "in_progress");
}

#[tokio::test]
async fn test_create_task_blank_title() {
    let server = common::make_server().await;

    for title in ["", "    "] {
        let response = server
            .post("/api/tasks")
            .json(&json!({ "title": title, "due_date": common::tomorrow() }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(body["error"]["details"]["title"].is_array());
    }
}

#[tokio::test]
async fn test_create_task_title_too_long() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({ "title": "x".repeat(101), "due_date": common::tomorrow() }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"]["details"]["title"].is_array());
}

#[tokio::test]
async fn test_create_task_description_too_long() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({
            "title": "Long notes",
            "description": "d".repeat(2001),
            "due_date": common::tomorrow()
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"]["details"]["description"].is_array());
}

#[tokio::test]
async fn test_create_task_unknown_status() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({
            "title": "Task",
            "due_date": common::tomorrow(),
            "status": "blocked"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["status"].is_array());
    assert!(body["error"]["details"].get("body").is_none());
}

#[tokio::test]
async fn test_create_task_null_status_defaults_to_todo() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({
            "title": "Task",
            "due_date": common::tomorrow(),
            "status": null
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["status"], "todo");
}

#[tokio::test]
async fn test_create_task_missing_due_date() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({ "title": "No deadline" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"]["details"]["due_date"].is_array());
}

#[tokio::test]
async fn test_create_task_malformed_due_date() {
    let server = common::make_server().await;

    for due in ["2099-01-01T09:00:00", "next friday"] {
        let response = server
            .post("/api/tasks")
            .json(&json!({ "title": "Task", "due_date": due }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let details = &response.json::<Value>()["error"]["details"];
        assert!(details["due_date"].is_array(), "due {due:?}");
        assert!(details.get("body").is_none());
    }
}

#[tokio::test]
async fn test_create_task_control_character_in_title() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({ "title": "a\u{0}b", "due_date": common::tomorrow() }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"]["details"]["title"].is_array());

    let listed = server.get("/api/tasks").await.json::<Vec<Value>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_task_malformed_json() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .text("{\"title\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"]["details"]["body"].is_array());
}

#[tokio::test]
async fn test_create_task_past_due_date_rejected() {
    let server = common::make_server().await;

    let response = server
        .post("/api/tasks")
        .json(&json!({ "title": "Late", "due_date": common::yesterday() }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"]["details"]["due_date"].is_array());
}

#[tokio::test]
async fn test_create_task_past_due_date_allowed_when_policy_off() {
    let server = common::make_server_with_policy(false).await;

    let response = server
        .post("/api/tasks")
        .json(&json!({ "title": "Late", "due_date": common::yesterday() }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_tasks_empty() {
    let server = common::make_server().await;

    let response = server.get("/api/tasks").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_tasks_returns_created_tasks_in_order() {
    let server = common::make_server().await;

    for title in ["first", "second", "third"] {
        server
            .post("/api/tasks")
            .json(&json!({ "title": title, "due_date": common::tomorrow() }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/api/tasks").await;
    response.assert_status_ok();

    let body = response.json::<Vec<Value>>();
    let titles: Vec<&str> = body.iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn test_get_task_success() {
    let server = common::make_server().await;

    let created = server
        .post("/api/tasks")
        .json(&json!({ "title": "Fetch me", "due_date": common::tomorrow() }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/tasks/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_task_not_found() {
    let server = common::make_server().await;

    let response = server.get("/api/tasks/999").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Task not found");
}

#[tokio::test]
async fn test_get_task_non_numeric_id() {
    let server = common::make_server().await;

    let response = server.get("/api/tasks/abc").await;

    assert!(response.status_code().is_client_error());
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_task_success() {
    let server = common::make_server().await;

    let id = server
        .post("/api/tasks")
        .json(&json!({ "title": "Delete me", "due_date": common::tomorrow() }))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    let response = server.delete(&format!("/api/tasks/{id}")).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    server
        .get(&format!("/api/tasks/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_task_not_found() {
    let server = common::make_server().await;

    let response = server.delete("/api/tasks/12345").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_task_twice() {
    let server = common::make_server().await;

    let id = server
        .post("/api/tasks")
        .json(&json!({ "title": "Once", "due_date": common::tomorrow() }))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    server
        .delete(&format!("/api/tasks/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete(&format!("/api/tasks/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_list_excludes_deleted_tasks() {
    let server = common::make_server().await;

    let mut ids = Vec::new();
    for title in ["keep", "drop", "also keep"] {
        let id = server
            .post("/api/tasks")
            .json(&json!({ "title": title, "due_date": common::tomorrow() }))
            .await
            .json::<Value>()["id"]
            .as_i64()
            .unwrap();
        ids.push(id);
    }

    server
        .delete(&format!("/api/tasks/{}", ids[1]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body = server.get("/api/tasks").await.json::<Vec<Value>>();
    let listed: Vec<i64> = body.iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(listed, vec![ids[0], ids[2]]);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let server = common::make_server().await;

    let first = server
        .post("/api/tasks")
        .json(&json!({ "title": "one", "due_date": common::tomorrow() }))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    server
        .delete(&format!("/api/tasks/{first}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let second = server
        .post("/api/tasks")
        .json(&json!({ "title": "two", "due_date": common::tomorrow() }))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    assert!(second > first);
}

// ─── Trailing slashes ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_routes_match() {
    let server = common::make_app_server().await;

    let id = server
        .post("/api/tasks/")
        .json(&json!({ "title": "Slash", "due_date": common::tomorrow() }))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    let plain = server.get("/api/tasks").await;
    plain.assert_status_ok();
    let slashed = server.get("/api/tasks/").await;
    slashed.assert_status_ok();
    assert_eq!(slashed.json::<Value>(), plain.json::<Value>());

    server
        .get(&format!("/api/tasks/{id}/"))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/api/tasks/{id}/"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/tasks/{id}"))
        .await
        .assert_status_not_found();
}
