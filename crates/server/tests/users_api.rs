use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, ServerState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app() -> Router {
    routes::build_router(ServerState::default(), cors())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    send_request(app, req).await
}

async fn send_request(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn user_lifecycle_scenario() -> anyhow::Result<()> {
    let app = build_app();

    let (status, id) = send(&app, "POST", "/users", Some(json!({"username": "ann", "age": 30, "gender": "female"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id, json!(1));

    let (status, user) = send(&app, "GET", "/users/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user, json!({"id": 1, "username": "ann", "age": 30, "gender": "female"}));

    let (status, user) = send(&app, "PATCH", "/users/1", Some(json!({"age": 31}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user, json!({"id": 1, "username": "ann", "age": 31, "gender": "female"}));

    let (status, body) = send(&app, "DELETE", "/users/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], "User: 1, has been deleted");

    let (status, body) = send(&app, "GET", "/users/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn empty_listing_is_not_found() -> anyhow::Result<()> {
    let app = build_app();
    let (status, _) = send(&app, "GET", "/users", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, "POST", "/users", Some(json!({"username": "ann", "age": 30, "gender": "female"}))).await?;
    let (status, list) = send(&app, "GET", "/users", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn patch_ignores_nulls_and_unknown_fields() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/users", Some(json!({"username": "ann", "age": 30, "gender": "female"}))).await?;

    let (status, user) = send(&app, "PATCH", "/users/1", Some(json!({"username": null, "gender": "male", "nickname": "a"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user, json!({"id": 1, "username": "ann", "age": 30, "gender": "female"}));

    let (status, _) = send(&app, "PATCH", "/users/9", Some(json!({"age": 1}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn search_filters_and_reports_empty() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/users", Some(json!({"username": "ann", "age": 30, "gender": "female"}))).await?;
    send(&app, "POST", "/users", Some(json!({"username": "bob", "age": 30, "gender": "male"}))).await?;

    let (status, list) = send(&app, "GET", "/users/search?age=30&gender=male", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([{"id": 2, "username": "bob", "age": 30, "gender": "male"}]));

    let (status, _) = send(&app, "GET", "/users/search?username=zed", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/users/search?age=0", None).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn non_positive_ids_are_rejected() -> anyhow::Result<()> {
    let app = build_app();
    for uri in ["/users/0", "/users/-3", "/users/abc"] {
        let (status, _) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
    let (status, _) = send(&app, "DELETE", "/users/0", None).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn invalid_gender_is_rejected() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "POST", "/users", Some(json!({"username": "ann", "age": 30, "gender": "other"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn malformed_patch_body_is_a_json_error() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/users", Some(json!({"username": "ann", "age": 30, "gender": "female"}))).await?;

    let req = Request::builder()
        .method("PATCH")
        .uri("/users/1")
        .header("content-type", "application/json")
        .body(Body::from("{\"age\": "))?;
    let (status, body) = send_request(&app, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");

    let (status, body) = send(&app, "PATCH", "/users/1", Some(json!({"age": "old"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");

    let (_, user) = send(&app, "GET", "/users/1", None).await?;
    assert_eq!(user["age"], 30);
    Ok(())
}

#[tokio::test]
async fn mistyped_search_params_are_json_errors() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/users", Some(json!({"username": "ann", "age": 30, "gender": "female"}))).await?;

    for uri in ["/users/search?age=abc", "/users/search?gender=other"] {
        let (status, body) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["error"], "Validation Error", "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn ids_keep_increasing_after_delete() -> anyhow::Result<()> {
    let app = build_app();
    let new = json!({"username": "ann", "age": 30, "gender": "female"});
    send(&app, "POST", "/users", Some(new.clone())).await?;
    let (_, second) = send(&app, "POST", "/users", Some(new.clone())).await?;
    send(&app, "DELETE", "/users/2", None).await?;
    let (_, third) = send(&app, "POST", "/users", Some(new)).await?;
    assert_eq!(second, json!(2));
    assert_eq!(third, json!(3));

    let (status, _) = send(&app, "DELETE", "/users/2", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn health_and_docs_are_served() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/users/search"].is_object());
    Ok(())
}
