//! Integration tests for locale resolution, the admin gate, and the API
//! validation paths that answer before touching the credential store.
//!
//! The database pool is created lazily against an unreachable address, so
//! these tests exercise the real middleware stack without a live store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use portfolio_server::config::Config;
use portfolio_server::models::User;
use portfolio_server::routes;
use portfolio_server::services::token::{TOKEN_LIFETIME_SECS, TokenClaims};
use portfolio_server::state::AppState;

const SECRET: &str = "integration-test-secret-0123456789abcdef";

fn test_config() -> Config {
    Config {
        port: 0,
        // Port 1 is never a PostgreSQL server; connections fail fast.
        database_url: "postgres://127.0.0.1:1/portfolio_test".to_string(),
        database_max_connections: 1,
        secret_key: SECRET.to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        smtp_host: None,
        smtp_port: 587,
        smtp_username: None,
        smtp_password: None,
        smtp_encryption: "starttls".to_string(),
        smtp_from_email: "noreply@example.com".to_string(),
        contact_email: "owner@example.com".to_string(),
        site_url: "http://localhost:3000".to_string(),
        admin_username: None,
        admin_password: None,
    }
}

fn test_state() -> AppState {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    AppState::new(&config, pool).expect("app state")
}

fn app() -> Router {
    routes::router(test_state())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
}

// --- Locale resolver ---

#[tokio::test]
async fn root_redirects_to_default_locale() {
    let response = app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es");
}

#[tokio::test]
async fn locale_cookie_overrides_accept_language() {
    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "NEXT_LOCALE=en")
        .header(header::ACCEPT_LANGUAGE, "es-ES,es;q=0.9")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(location(&response), "/en");
}

#[tokio::test]
async fn accept_language_used_without_cookie() {
    let request = Request::builder()
        .uri("/")
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(location(&response), "/en");
}

#[tokio::test]
async fn malformed_accept_language_falls_back_to_default() {
    let request = Request::builder()
        .uri("/")
        .header(header::ACCEPT_LANGUAGE, ";;q=;;")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es");
}

#[tokio::test]
async fn unsupported_accept_language_falls_back_to_default() {
    let request = Request::builder()
        .uri("/")
        .header(header::ACCEPT_LANGUAGE, "ja,zh;q=0.9")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(location(&response), "/es");
}

#[tokio::test]
async fn prefixed_path_passes_through() {
    let response = app().oneshot(get("/es")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app().oneshot(get("/en/about")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unprefixed_page_path_redirects_with_suffix() {
    let response = app().oneshot(get("/contacto")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es/contacto");
}

#[tokio::test]
async fn query_string_is_preserved_across_redirect() {
    let request = Request::builder()
        .uri("/contact?subject=hi")
        .header(header::ACCEPT_LANGUAGE, "en")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(location(&response), "/en/contact?subject=hi");
}

#[tokio::test]
async fn asset_like_paths_are_not_localized() {
    let response = app().oneshot(get("/favicon.ico")).await.unwrap();
    // Falls through to the 404 handler instead of a locale redirect.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoint_is_not_localized() {
    let response = app().oneshot(get("/health")).await.unwrap();
    // The store is unreachable in tests; the point is there is no redirect.
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unknown_page_renders_404() {
    let response = app().oneshot(get("/es/no-such-page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// --- Admin gate ---

fn issued_token(state: &AppState) -> String {
    let user = User {
        id: Uuid::now_v7(),
        username: "admin".to_string(),
        pass: String::new(),
        role: "admin".to_string(),
        created: Utc::now(),
    };
    state.tokens().issue(&user).expect("token")
}

fn admin_request(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::COOKIE, format!("auth-token={token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn admin_without_token_redirects_to_login() {
    let response = app().oneshot(get("/es/admin")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es/admin/login");
}

#[tokio::test]
async fn admin_gate_redirects_to_default_locale_login_for_every_locale() {
    let response = app().oneshot(get("/en/admin")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es/admin/login");
}

#[tokio::test]
async fn admin_login_page_is_exempt() {
    let response = app().oneshot(get("/es/admin/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app().oneshot(get("/en/admin/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_token_is_forwarded() {
    let state = test_state();
    let token = issued_token(&state);

    let response = routes::router(state)
        .oneshot(admin_request("/es/admin", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn tampered_token_redirects_to_login() {
    let state = test_state();
    let mut token = issued_token(&state);
    token.push('x');

    let response = routes::router(state)
        .oneshot(admin_request("/es/admin", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es/admin/login");
}

#[tokio::test]
async fn expired_token_redirects_to_login() {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        iss: "portfolio".to_string(),
        sub: Uuid::now_v7().to_string(),
        name: "admin".to_string(),
        role: "admin".to_string(),
        iat: now - 2 * TOKEN_LIFETIME_SECS,
        exp: now - TOKEN_LIFETIME_SECS,
    };
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let response = app()
        .oneshot(admin_request("/es/admin", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/es/admin/login");
}

// --- API validation paths ---

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn login_with_missing_fields_is_rejected() {
    let response = app()
        .oneshot(post_json("/api/auth/login", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "username and password are required");
}

#[tokio::test]
async fn change_password_with_missing_fields_is_rejected() {
    let response = app()
        .oneshot(post_json("/api/auth/change-password", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn change_password_with_short_password_is_rejected() {
    let body = r#"{"currentPassword":"old-password","newPassword":"abc"}"#;
    let response = app()
        .oneshot(post_json("/api/auth/change-password", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn change_password_without_token_is_unauthorized() {
    let body = r#"{"currentPassword":"old-password","newPassword":"new-password"}"#;
    let response = app()
        .oneshot(post_json("/api/auth/change-password", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn contact_submission_is_validated() {
    let body = r#"{"name":"A","email":"nope","subject":"x","message":"short"}"#;
    let response = app()
        .oneshot(post_json("/api/contact", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_submission_without_smtp_is_acknowledged() {
    let body = r#"{"name":"Ada","email":"ada@example.com","subject":"Hello","message":"I would like to talk about a project."}"#;
    let response = app()
        .oneshot(post_json("/api/contact", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
