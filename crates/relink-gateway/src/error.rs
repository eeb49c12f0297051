use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relink_core::ShortenerError;
use relink_html::HtmlError;
use relink_redirector::RedirectorError;
use relink_shortener::ShortenHtmlError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

pub const INVALID_HTML_CONTENT: &str = "Missing or invalid htmlContent";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("short code not found")]
    NotFound,
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("{0}")]
    Unprocessable(String),
    #[error("{0}")]
    Internal(String),
}

impl From<ShortenHtmlError> for AppError {
    fn from(err: ShortenHtmlError) -> Self {
        match err {
            ShortenHtmlError::Html(HtmlError::MalformedInput(message)) => {
                AppError::Unprocessable(format!("malformed html: {message}"))
            }
            ShortenHtmlError::Shortener(ShortenerError::InvalidUrl(message)) => {
                AppError::BadRequest(message)
            }
            ShortenHtmlError::Shortener(other) => AppError::Internal(other.to_string()),
        }
    }
}

impl From<HtmlError> for AppError {
    fn from(err: HtmlError) -> Self {
        ShortenHtmlError::from(err).into()
    }
}

impl From<RedirectorError> for AppError {
    fn from(err: RedirectorError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
