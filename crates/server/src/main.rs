//! Portfolio site server.
//!
//! This file initializes the Axum web server, sets up the database
//! connection, and registers all routes and middleware. It orchestrates the
//! application's startup and defines its overall structure.

mod config;
mod content;
mod db;
mod error;
mod i18n;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod theme;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::models::User;
use crate::models::user::CreateUser;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting portfolio server");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, "Configuration loaded");

    let pool = db::create_pool(&config).await?;
    db::ensure_schema(&pool).await?;
    bootstrap_admin(&pool, &config).await?;

    info!("Database connection established");

    let state = AppState::new(&config, pool).context("failed to initialize application state")?;

    let cors = build_cors_layer(&config);

    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, site = %config.site_url, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Create the admin account on first start when credentials are provided.
///
/// Subsequent starts with the same username are a no-op; the password-change
/// flow owns all later credential updates.
async fn bootstrap_admin(pool: &PgPool, config: &Config) -> Result<()> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        return Ok(());
    };

    if User::find_by_username(pool, username).await?.is_some() {
        return Ok(());
    }

    let user = User::create(
        pool,
        CreateUser {
            username: username.clone(),
            password: password.clone(),
            role: "admin".to_string(),
        },
    )
    .await?;

    info!(user_id = %user.id, "created bootstrap admin account");
    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
            .allow_credentials(true)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,sqlx=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
