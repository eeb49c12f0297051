use relink_core::ShortenerError;
use relink_html::HtmlError;
use thiserror::Error;

/// Failure of a whole-document shorten request.
#[derive(Debug, Clone, Error)]
pub enum ShortenHtmlError {
    #[error(transparent)]
    Html(#[from] HtmlError),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}
