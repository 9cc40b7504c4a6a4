#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use txcat_api::config::ServerConfig;
use txcat_api::router::build_app_router;
use txcat_api::state::AppState;
use txcat_db::models::category::Category;
use txcat_db::models::question::{Question, QuestionOption, QuestionType};
use txcat_db::repositories::{CategoryRepo, QuestionRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over stores seeded with the given data.
///
/// The returned router is cheap to clone and every clone shares the same
/// stores, so a test can issue several requests against one state.
pub fn build_test_app(categories: Vec<Category>, questions: Vec<Question>) -> Router {
    build_test_app_with_config(test_config(), categories, questions)
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with_config(
    config: ServerConfig,
    categories: Vec<Category>,
    questions: Vec<Question>,
) -> Router {
    let state = AppState::new(
        CategoryRepo::with_categories(categories),
        QuestionRepo::with_questions(questions),
        config,
    );
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn category(id: &str, name: &str, parent_id: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: parent_id.to_string(),
    }
}

pub fn number_question(id: &str, title: &str, category_id: &str) -> Question {
    Question {
        id: id.to_string(),
        title: title.to_string(),
        category_id: category_id.to_string(),
        kind: QuestionType::Number,
        options: None,
    }
}

pub fn string_question(id: &str, title: &str, category_id: &str, options: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        title: title.to_string(),
        category_id: category_id.to_string(),
        kind: QuestionType::String,
        options: Some(
            options
                .iter()
                .enumerate()
                .map(|(i, o)| QuestionOption {
                    id: format!("{id}-{i}"),
                    title: o.to_string(),
                })
                .collect(),
        ),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

/// POST an arbitrary (possibly malformed) body.
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub async fn patch_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Body::from(json.to_string())).await
}

pub async fn patch_raw(app: &Router, uri: &str, body: &str) -> Response {
    send(app, Method::PATCH, uri, Body::from(body.to_string())).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn send_method(app: &Router, method: Method, uri: &str) -> Response {
    send(app, method, uri, Body::empty()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `title` of the first entry in an error body.
pub fn error_title(json: &serde_json::Value) -> &str {
    json["errors"][0]["title"].as_str().unwrap_or_default()
}
