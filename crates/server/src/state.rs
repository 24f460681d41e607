//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::Config;
use crate::db;
use crate::services::email::EmailService;
use crate::services::token::TokenService;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Handlers receive the state
/// by extraction; nothing here is process-global.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// PostgreSQL connection pool. Connections are acquired per query and
    /// returned to the pool on every exit path.
    db: PgPool,

    /// Session token signing/verification.
    tokens: TokenService,

    /// Template engine.
    theme: ThemeEngine,

    /// Contact relay (available when SMTP_HOST is configured).
    email: Option<Arc<EmailService>>,
}

impl AppState {
    /// Build the application state from configuration and a database pool.
    pub fn new(config: &Config, pool: PgPool) -> Result<Self> {
        let tokens = TokenService::new(config.secret_key.as_bytes());

        let theme = ThemeEngine::new().context("failed to initialize theme engine")?;

        let email = match &config.smtp_host {
            Some(host) => {
                let service = EmailService::new(
                    host,
                    config.smtp_port,
                    config.smtp_username.as_deref(),
                    config.smtp_password.as_deref(),
                    &config.smtp_encryption,
                    config.smtp_from_email.clone(),
                    config.contact_email.clone(),
                )
                .context("failed to initialize email service")?;
                Some(Arc::new(service))
            }
            None => None,
        };

        Ok(Self {
            inner: Arc::new(AppStateInner {
                db: pool,
                tokens,
                theme,
                email,
            }),
        })
    }

    /// The database pool.
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// The token service.
    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }

    /// The template engine.
    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    /// The contact relay, when SMTP is configured.
    pub fn email(&self) -> Option<&EmailService> {
        self.inner.email.as_deref()
    }

    /// Whether the credential store answers queries.
    pub async fn database_healthy(&self) -> bool {
        db::check_health(self.db()).await
    }
}
