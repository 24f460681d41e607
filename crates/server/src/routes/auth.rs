//! Authentication API routes (login, password change).
//!
//! Login exchanges a username/password pair for a signed session token.
//! No session record is persisted server-side; the client stores the token
//! in the `auth-token` cookie.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::admin_gate::AUTH_COOKIE;
use crate::middleware::cookie_value;
use crate::models::User;
use crate::state::AppState;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error response for authentication failures.
#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub error: String,
}

/// Password change request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

/// Password change response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Typed login error for explicit status code mapping.
#[derive(Debug)]
enum LoginError {
    /// Username or password missing from the request (400).
    MissingFields,
    /// Unknown username or wrong password, deliberately indistinguishable (401).
    InvalidCredentials,
    /// Database or signing failure (500).
    Internal,
}

impl LoginError {
    fn status_code(&self) -> StatusCode {
        match self {
            LoginError::MissingFields => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "username and password are required",
            LoginError::InvalidCredentials => "invalid username or password",
            LoginError::Internal => "internal server error",
        }
    }
}

/// Perform login and return the signed token on success.
async fn do_login(state: &AppState, request: &LoginRequest) -> Result<String, LoginError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(LoginError::MissingFields);
    }

    let user = match User::find_by_username(state.db(), &request.username).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(LoginError::InvalidCredentials),
        Err(e) => {
            tracing::error!(error = %e, "database error during login");
            return Err(LoginError::Internal);
        }
    };

    if !user.verify_password(&request.password) {
        return Err(LoginError::InvalidCredentials);
    }

    let token = state.tokens().issue(&user).map_err(|e| {
        tracing::error!(error = %e, "failed to issue session token");
        LoginError::Internal
    })?;

    info!(user_id = %user.id, "admin logged in");
    Ok(token)
}

/// Login handler.
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<AuthErrorBody>)> {
    match do_login(&state, &request).await {
        Ok(token) => Ok(Json(TokenResponse { token })),
        Err(e) => Err((
            e.status_code(),
            Json(AuthErrorBody {
                error: e.message().to_string(),
            }),
        )),
    }
}

/// Extract the session token from the Authorization header or cookie.
fn bearer_or_cookie(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        && let Some(token) = header.strip_prefix("Bearer ")
    {
        return Some(token.to_string());
    }

    cookie_value(headers, AUTH_COOKIE).map(str::to_string)
}

/// Password change handler.
///
/// POST /api/auth/change-password
///
/// Requires proof of the current password before the stored hash is
/// overwritten. The caller's existing token stays valid until its original
/// expiry; nothing is re-issued.
async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    if request.current_password.is_empty() || request.new_password.is_empty() {
        return Err(AppError::BadRequest(
            "current and new password are required".to_string(),
        ));
    }

    if request.new_password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "new password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let token = bearer_or_cookie(&headers).ok_or(AppError::Unauthorized)?;

    let claims = state.tokens().verify(&token).map_err(|e| {
        tracing::debug!(error = %e, "password change with invalid token");
        AppError::Unauthorized
    })?;

    let user_id: Uuid = claims.sub.parse().map_err(|_| AppError::Unauthorized)?;

    let user = User::find_by_id(state.db(), user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !user.verify_password(&request.current_password) {
        return Err(AppError::Unauthorized);
    }

    User::update_password(state.db(), user.id, &request.new_password).await?;

    info!(user_id = %user.id, "password changed");

    Ok(Json(MessageResponse {
        success: true,
        message: "password updated".to_string(),
    }))
}

/// Create the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/change-password", post(change_password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn invalid_credentials_message_is_uniform() {
        // Unknown username and wrong password must be indistinguishable.
        assert_eq!(
            LoginError::InvalidCredentials.message(),
            "invalid username or password"
        );
        assert_eq!(
            LoginError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("auth-token=from-cookie"),
        );

        assert_eq!(bearer_or_cookie(&headers), Some("from-header".to_string()));
    }

    #[test]
    fn cookie_used_without_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("auth-token=from-cookie"),
        );

        assert_eq!(bearer_or_cookie(&headers), Some("from-cookie".to_string()));
    }

    #[test]
    fn non_bearer_authorization_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        assert_eq!(bearer_or_cookie(&headers), None);
    }
}
