//! HTTP routes.
//!
//! Chat platforms call the bot through an outgoing webhook: `POST /` with a
//! form body, or `GET /` with the same fields in the query string.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use nrdbot_domain::OutboundMessage;
use serde::Deserialize;
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::LookupError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(lookup_get).post(lookup_post))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

/// Outgoing-webhook form body.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookForm {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub trigger_word: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookQuery {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub text: String,
}

async fn lookup_post(
    State(app): State<Arc<App>>,
    Form(form): Form<WebhookForm>,
) -> Result<Response, ApiError> {
    if form.token != app.webhook.post {
        tracing::warn!("Rejected POST webhook with invalid token");
        return Ok(Json(OutboundMessage::plain(app.messages.invalid_token.clone())).into_response());
    }

    let text = match form.trigger_word.as_deref() {
        Some(trigger_word) => strip_trigger_word(&form.text, trigger_word),
        None => form.text,
    };
    if text.trim().is_empty() {
        return Ok(Json(OutboundMessage::plain(app.messages.no_query.clone())).into_response());
    }

    let message = app.use_cases.lookup.execute(&text).await?;
    Ok(Json(message).into_response())
}

async fn lookup_get(
    State(app): State<Arc<App>>,
    Query(query): Query<WebhookQuery>,
) -> Result<Response, ApiError> {
    if query.token != app.webhook.get {
        tracing::warn!("Rejected GET webhook with invalid token");
        return Ok(app.messages.invalid_token.clone().into_response());
    }

    if query.text.trim().is_empty() {
        return Ok(Json(app.messages.no_query.clone()).into_response());
    }

    let message = app.use_cases.lookup.execute(&query.text).await?;
    Ok(Json(message).into_response())
}

/// Remove the first occurrence of `trigger_word` and any whitespace after it.
pub fn strip_trigger_word(text: &str, trigger_word: &str) -> String {
    if trigger_word.is_empty() {
        return text.to_string();
    }
    match text.find(trigger_word) {
        Some(start) => {
            let rest = text[start + trigger_word.len()..].trim_start();
            format!("{}{}", &text[..start], rest)
        }
        None => text.to_string(),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
