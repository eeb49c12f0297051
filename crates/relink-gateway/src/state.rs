use std::sync::Arc;

use relink_redirector::Redirector;
use relink_shortener::HtmlShortener;

#[derive(Clone)]
pub struct AppState {
    shortener: HtmlShortener,
    redirector: Arc<dyn Redirector>,
    base_url: String,
}

impl AppState {
    pub fn new(
        shortener: HtmlShortener,
        redirector: Arc<dyn Redirector>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            redirector,
            base_url: public_base_url.into(),
        }
    }

    pub fn shortener(&self) -> &HtmlShortener {
        &self.shortener
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    /// Base URL short links are built on when a request names none.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
