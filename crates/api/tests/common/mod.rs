#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use primetime_api::auth::jwt::JwtConfig;
use primetime_api::config::ServerConfig;
use primetime_api::routes;
use primetime_api::state::AppState;
use primetime_core::clock::{Clock, FixedClock};
use primetime_db::models::show::CreateShow;
use primetime_db::repositories::ShowRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        slate_size: 10,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            identity_expiry_days: 30,
        },
    }
}

/// A `FixedClock` pinned inside the voting window (10:00 UTC) on a
/// fixed reference day.
pub fn clock_at(hour: u32, minute: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock::at(reference_time(hour, minute)))
}

/// The reference day used by clocked tests: 2024-06-15.
pub fn reference_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, hour, minute, 0).unwrap()
}

/// Build the full application router with all middleware layers, using the
/// given database pool and clock.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The clock is injectable so tests
/// can pin the voting window open or closed.
pub fn build_test_app(pool: PgPool, clock: Arc<dyn Clock>) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
        clock,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes(&state))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Shorthand: build the app with the clock pinned to 10:00 (voting open).
pub fn build_test_app_at(pool: PgPool, hour: u32, minute: u32) -> Router {
    build_test_app(pool, clock_at(hour, minute))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with an identity cookie attached.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, format!("token={cookie}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and an identity cookie attached.
pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, format!("token={cookie}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Extract the identity token value from a response's `Set-Cookie` header,
/// if one was issued.
pub fn identity_cookie(response: &Response<Body>) -> Option<String> {
    let header = response.headers().get("set-cookie")?;
    let value = header.to_str().ok()?;
    let token = value.strip_prefix("token=")?;
    Some(token.split(';').next().unwrap_or(token).to_string())
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Insert `count` shows directly into the catalog and return their ids.
pub async fn seed_shows(pool: &PgPool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let input = CreateShow {
            title: format!("Show {i:02}"),
            description: format!("Description for show {i:02}"),
            image_url: Some(format!("https://img.test/show-{i:02}.jpg")),
            genre: Some("Drama".to_string()),
        };
        let show = ShowRepo::create(pool, &input)
            .await
            .expect("show creation should succeed");
        ids.push(show.id);
    }
    ids
}
