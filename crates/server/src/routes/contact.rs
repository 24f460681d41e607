//! Contact form relay.
//!
//! Validates submissions server-side with the same rules the form applies
//! in the browser, then relays them to the site owner over SMTP. When SMTP
//! is not configured the submission is logged and still acknowledged.

use std::sync::LazyLock;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex literal"));

/// Contact form submission.
#[derive(Debug, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Contact relay response.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Validate a submission, returning one message per failing field.
fn validate(input: &ContactInput) -> Vec<&'static str> {
    let mut errors = Vec::new();

    if input.name.trim().chars().count() < 2 {
        errors.push("name must be at least 2 characters");
    }
    if !EMAIL_RE.is_match(input.email.trim()) {
        errors.push("a valid email is required");
    }
    if input.subject.trim().chars().count() < 3 {
        errors.push("subject must be at least 3 characters");
    }
    if input.message.trim().chars().count() < 10 {
        errors.push("message must be at least 10 characters");
    }

    errors
}

/// Contact form handler.
///
/// POST /api/contact
async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> AppResult<Json<ContactResponse>> {
    let errors = validate(&input);
    if !errors.is_empty() {
        return Err(AppError::BadRequest(errors.join("; ")));
    }

    match state.email() {
        Some(email) => {
            email
                .send_contact_message(
                    input.name.trim(),
                    input.email.trim(),
                    input.subject.trim(),
                    input.message.trim(),
                )
                .await?;
            tracing::info!(from = %input.email, "contact message relayed");
        }
        None => {
            tracing::info!(
                from = %input.email,
                subject = %input.subject,
                "contact message received (SMTP not configured)"
            );
        }
    }

    Ok(Json(ContactResponse {
        success: true,
        message: "message sent".to_string(),
    }))
}

/// Create the contact router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactInput {
        ContactInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I would like to talk about a project.".to_string(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate(&valid_input()).is_empty());
    }

    #[test]
    fn short_name_is_rejected() {
        let mut input = valid_input();
        input.name = "A".to_string();
        assert_eq!(validate(&input), vec!["name must be at least 2 characters"]);
    }

    #[test]
    fn invalid_email_is_rejected() {
        for bad in ["", "not-an-email", "a@b", "a b@c.com", "a@b .com"] {
            let mut input = valid_input();
            input.email = bad.to_string();
            assert!(
                validate(&input).contains(&"a valid email is required"),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn short_subject_and_message_are_rejected() {
        let mut input = valid_input();
        input.subject = "Hi".to_string();
        input.message = "too short".to_string();
        let errors = validate(&input);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_submission_fails_every_field() {
        let input = ContactInput {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
        };
        assert_eq!(validate(&input).len(), 4);
    }
}
