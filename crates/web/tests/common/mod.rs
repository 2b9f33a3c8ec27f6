#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use wildpreserve_web::config::ServerConfig;
use wildpreserve_web::router::build_app_router;
use wildpreserve_web::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to [`build_app_router`] so integration tests exercise the same
/// middleware stack (request ID, timeout, tracing, panic recovery) that
/// production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the router without a TCP listener.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a urlencoded form POST, the way a browser submits the pages.
pub async fn post_form<T: serde::Serialize>(app: Router, path: &str, form: &T) -> Response {
    let body = serde_urlencoded::to_string(form).unwrap();
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect the response body as a UTF-8 string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("response has no Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Trailing numeric id of a detail-page path such as `/wildlife/class/7`.
pub fn id_from_location(location: &str) -> i64 {
    location
        .rsplit('/')
        .next()
        .and_then(|s| s.parse().ok())
        .expect("Location does not end in an id")
}

// ---------------------------------------------------------------------------
// Fixture builders, driven through the public form endpoints.
// ---------------------------------------------------------------------------

pub async fn create_class(pool: &PgPool, name: &str) -> i64 {
    let response = post_form(
        build_test_app(pool.clone()),
        "/wildlife/class/create",
        &[("name", name)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    id_from_location(&location(&response))
}

pub async fn create_order(pool: &PgPool, name: &str) -> i64 {
    let response = post_form(
        build_test_app(pool.clone()),
        "/wildlife/order/create",
        &[("name", name)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    id_from_location(&location(&response))
}

pub async fn create_animal(pool: &PgPool, name: &str, class_id: i64, order_ids: &[i64]) -> i64 {
    let mut fields = vec![
        ("name".to_string(), name.to_string()),
        ("binomial".to_string(), format!("{name} binomial")),
        ("description".to_string(), format!("Description of {name}.")),
        ("animalclass".to_string(), class_id.to_string()),
        ("img".to_string(), "img1.png".to_string()),
    ];
    for order_id in order_ids {
        fields.push(("order".to_string(), order_id.to_string()));
    }

    let response = post_form(
        build_test_app(pool.clone()),
        "/wildlife/animal/create",
        &fields,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    id_from_location(&location(&response))
}

pub async fn create_preserve_status(pool: &PgPool, animal_id: i64, name: &str) -> i64 {
    let response = post_form(
        build_test_app(pool.clone()),
        "/wildlife/preservestatus/create",
        &[("animal", animal_id.to_string()), ("name", name.to_string())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    id_from_location(&location(&response))
}
