//! HTTP request handlers

use super::state::AppState;
use crate::search::SearchRequest;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

/// Body sent to the caller when anything goes wrong server-side
const SERVER_ERROR_BODY: &str = "Server error";

/// Search handler
pub async fn search(State(state): State<AppState>, Json(request): Json<SearchRequest>) -> Response {
    if request.is_blank() {
        return plain_text(StatusCode::BAD_REQUEST, "Input must not be empty");
    }

    match state.search.execute(&request).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::error!("Keyword extraction failed: {}", e);
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY)
        }
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "engines": state.registry.names(),
    }))
}

/// Converts a handler panic into a generic 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", details);

    plain_text(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY)
}

fn plain_text(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
