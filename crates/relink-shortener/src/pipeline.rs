use crate::error::ShortenHtmlError;
use crate::service::validate_url;
use relink_core::{Mapping, MappingEntry, Resolver};
use relink_html::{extract, rewrite};
use std::sync::Arc;
use tracing::{info, warn};

/// Counters reported alongside a rewritten document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortenStats {
    /// Distinct URLs that received a short URL.
    pub urls_shortened: usize,
    /// Attribute values that were replaced.
    pub locations_rewritten: usize,
    /// Eligible URLs left alone because they are not valid absolute URLs.
    pub urls_skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub modified_html: String,
    pub replacements: Vec<MappingEntry>,
    pub stats: ShortenStats,
}

/// Extract, resolve and rewrite in one call.
#[derive(Clone)]
pub struct HtmlShortener {
    resolver: Arc<dyn Resolver>,
}

impl std::fmt::Debug for HtmlShortener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlShortener").finish_non_exhaustive()
    }
}

impl HtmlShortener {
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// Replaces every eligible URL in `html` with its short URL under `base_url`.
    ///
    /// Eligible values that fail URL validation (for example `https://` with no
    /// host) are skipped and stay unchanged. The store is not touched when the
    /// document has nothing to shorten.
    pub async fn shorten_html(
        &self,
        html: &str,
        base_url: &str,
    ) -> Result<ShortenOutcome, ShortenHtmlError> {
        let mut candidates: Vec<String> = extract(html)?.into_iter().collect();
        candidates.sort_unstable();

        let total = candidates.len();
        candidates.retain(|url| match validate_url(url) {
            Ok(()) => true,
            Err(err) => {
                warn!(url = url.as_str(), error = %err, "skipping url");
                false
            }
        });
        let urls_skipped = total - candidates.len();

        let mapping = if candidates.is_empty() {
            Mapping::new()
        } else {
            self.resolver.resolve(&candidates, base_url).await?
        };

        let rewritten = rewrite(html, &mapping)?;
        let stats = ShortenStats {
            urls_shortened: rewritten.replacements.len(),
            locations_rewritten: rewritten.rewritten_locations,
            urls_skipped,
        };

        info!(
            urls = stats.urls_shortened,
            locations = stats.locations_rewritten,
            skipped = stats.urls_skipped,
            "shortened html document"
        );

        Ok(ShortenOutcome {
            modified_html: rewritten.html,
            replacements: rewritten.replacements,
            stats,
        })
    }
}
