//! Shared route helpers for page rendering.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;

/// Render a page template, falling back to a minimal error page.
///
/// Template failures are infrastructure errors: logged server-side, with no
/// internal detail in the client-visible body.
pub fn render_page(state: &AppState, template: &str, context: &tera::Context) -> Response {
    match state.theme().render(template, context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, template = %template, "failed to render template");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(
                    "<!DOCTYPE html>\n<html><head><title>Error</title></head>\
                     <body><h1>Something went wrong</h1></body></html>"
                        .to_string(),
                ),
            )
                .into_response()
        }
    }
}
