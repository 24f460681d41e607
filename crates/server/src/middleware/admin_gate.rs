//! Admin access gate middleware.
//!
//! Protects `/<locale>/admin/...` for every supported locale, excluding the
//! login route. Authentication is fully determined per request by validity
//! of the signed token in the `auth-token` cookie; there is no server-side
//! session state. Verification failures are logged and answered with a
//! redirect to the login page, never a 500.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use uuid::Uuid;

use crate::i18n::{self, DEFAULT_LOCALE};
use crate::middleware::cookie_value;
use crate::state::AppState;

/// Cookie holding the signed session token verbatim.
pub const AUTH_COOKIE: &str = "auth-token";

/// Verified admin identity, stored in request extensions for handlers.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub user_id: Uuid,
    pub username: String,
    pub role: String,
}

/// Middleware to gate admin routes behind a valid session token.
pub async fn guard_admin(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path();

    // Only locale-prefixed admin paths are gated. Unprefixed /admin requests
    // fall through to the locale resolver and come back prefixed.
    let Some((_, rest)) = i18n::split_locale(path) else {
        return next.run(request).await;
    };

    if rest != "/admin" && !rest.starts_with("/admin/") {
        return next.run(request).await;
    }

    // The login page itself is always reachable.
    if rest == "/admin/login" {
        return next.run(request).await;
    }

    let Some(token) = cookie_value(request.headers(), AUTH_COOKIE) else {
        tracing::debug!(path = %path, "admin request without token");
        return login_redirect();
    };

    let claims = match state.tokens().verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "admin token rejected");
            return login_redirect();
        }
    };

    let Ok(user_id) = claims.sub.parse::<Uuid>() else {
        tracing::debug!(sub = %claims.sub, "invalid subject in admin token");
        return login_redirect();
    };

    request.extensions_mut().insert(AdminAuth {
        user_id,
        username: claims.name,
        role: claims.role,
    });

    next.run(request).await
}

/// Redirect to the login route under the default locale.
fn login_redirect() -> Response {
    Redirect::temporary(&format!("/{DEFAULT_LOCALE}/admin/login")).into_response()
}
