//! The digest endpoint: scrape, summarize, restructure, splice, render.

use axum::extract::Extension;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::server::app::AppState;

/// Fixed response when the service credential is absent. Returned before
/// any scraping or summarization work starts.
const MISSING_KEY_MESSAGE: &str = "La clave de API de OpenAI no está configurada.";

/// Produce the daily digest as an HTML fragment.
pub async fn digest_handler(Extension(state): Extension<AppState>) -> Response {
    let Some(pipeline) = state.pipeline.clone() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_MESSAGE).into_response();
    };

    let html = pipeline.run().await;

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response()
}
