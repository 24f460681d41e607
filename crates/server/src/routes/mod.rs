//! HTTP route registration.

pub mod auth;
pub mod contact;
pub mod health;
mod helpers;
pub mod pages;

use axum::Router;

use crate::middleware;
use crate::state::AppState;

/// Assemble the application router with its middleware stack.
///
/// Layer order (last added = first executed): admin gate, then locale
/// resolution, then route dispatch.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(auth::router())
        .merge(contact::router())
        .merge(health::router())
        .fallback(pages::not_found)
        .layer(axum::middleware::from_fn(middleware::resolve_locale))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::guard_admin,
        ))
        .with_state(state)
}
