use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use relink_core::ShortCode;
use relink_redirector::Redirector;
use tracing::debug;

/// Answers with a 301 to the original URL of `code`.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = ShortCode::new(code).map_err(|err| {
        debug!(error = %err, "malformed short code");
        AppError::NotFound
    })?;

    let record = state
        .redirector()
        .resolve(&code)
        .await?
        .ok_or(AppError::NotFound)?;

    let location = HeaderValue::try_from(record.original_url.as_str()).map_err(|err| {
        AppError::Internal(format!("stored url is not a valid location header: {err}"))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
