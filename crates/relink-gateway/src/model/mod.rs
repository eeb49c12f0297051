use relink_core::MappingEntry;
use relink_shortener::{ShortenOutcome, ShortenStats};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/shorten`.
///
/// `htmlContent` is kept as raw JSON so a wrong type is reported the same
/// way as a missing field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub html_content: Option<Value>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ShortenRequest {
    /// The document to shorten, if present as a non-empty string.
    pub fn html(&self) -> Option<&str> {
        self.html_content
            .as_ref()
            .and_then(Value::as_str)
            .filter(|html| !html.is_empty())
    }
}

/// Query of `POST /api/shorten/raw`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShortenParams {
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub success: bool,
    pub modified_html: String,
    pub replacements: Vec<Replacement>,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replacement {
    pub original_url: String,
    pub short_url: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub urls_shortened: usize,
    pub locations_rewritten: usize,
    pub urls_skipped: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl From<MappingEntry> for Replacement {
    fn from(entry: MappingEntry) -> Self {
        Self {
            original_url: entry.original_url,
            short_url: entry.short_url,
            code: entry.short_code.to_string(),
        }
    }
}

impl From<ShortenStats> for Stats {
    fn from(stats: ShortenStats) -> Self {
        Self {
            urls_shortened: stats.urls_shortened,
            locations_rewritten: stats.locations_rewritten,
            urls_skipped: stats.urls_skipped,
        }
    }
}

impl From<ShortenOutcome> for ShortenResponse {
    fn from(outcome: ShortenOutcome) -> Self {
        Self {
            success: true,
            modified_html: outcome.modified_html,
            replacements: outcome.replacements.into_iter().map(Into::into).collect(),
            stats: outcome.stats.into(),
        }
    }
}
