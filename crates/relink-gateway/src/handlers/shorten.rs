use crate::error::{AppError, Result, INVALID_HTML_CONTENT};
use crate::model::{RawShortenParams, ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected shorten request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(INVALID_HTML_CONTENT.to_string())
        }
    })?;

    let html = request
        .html()
        .ok_or_else(|| AppError::BadRequest(INVALID_HTML_CONTENT.to_string()))?;

    shorten(&state, html, request.base_url.as_deref()).await
}

/// Same as [`shorten_handler`] for a bare `text/html` body.
pub async fn shorten_raw_handler(
    State(state): State<AppState>,
    Query(params): Query<RawShortenParams>,
    body: Bytes,
) -> Result<Json<ShortenResponse>> {
    if body.is_empty() {
        return Err(AppError::BadRequest(INVALID_HTML_CONTENT.to_string()));
    }

    let html = relink_html::parse_input(&body)?;
    shorten(&state, html, params.base_url.as_deref()).await
}

async fn shorten(
    state: &AppState,
    html: &str,
    base_url: Option<&str>,
) -> Result<Json<ShortenResponse>> {
    let base_url = base_url
        .filter(|base| !base.is_empty())
        .unwrap_or(state.base_url());

    let outcome = state.shortener().shorten_html(html, base_url).await?;
    Ok(Json(outcome.into()))
}
