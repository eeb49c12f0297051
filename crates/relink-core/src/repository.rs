use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, StorageError>;

/// What a short code points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub original_url: String,
    /// Minting time. Informational only; codes never expire.
    pub created_at: Timestamp,
}

impl UrlRecord {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// Lookup by short code, all the redirect path needs.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

/// Read-write access to the code table.
///
/// Implementations must keep both the short code and the original URL
/// unique, so that at most one code is ever minted per URL even when
/// several requests race on the same URL.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Finds the short code already assigned to `original_url`.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortCode>>;

    /// Batch variant of [`Repository::find_by_url`]. URLs without a code are
    /// absent from the returned map.
    async fn find_many_by_url(&self, original_urls: &[String])
        -> Result<HashMap<String, ShortCode>>;

    /// Stores a freshly minted code. Fails with
    /// [`StorageError::CodeTaken`] or [`StorageError::UrlTaken`] instead of
    /// overwriting anything.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;
}

#[async_trait]
impl<T: ReadRepository + ?Sized> ReadRepository for Arc<T> {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        (**self).get(code).await
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        (**self).exists(code).await
    }
}

/// Lets the shortener and the redirector share one store.
#[async_trait]
impl<T: Repository + ?Sized> Repository for Arc<T> {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortCode>> {
        (**self).find_by_url(original_url).await
    }

    async fn find_many_by_url(
        &self,
        original_urls: &[String],
    ) -> Result<HashMap<String, ShortCode>> {
        (**self).find_many_by_url(original_urls).await
    }

    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        (**self).insert(code, record).await
    }
}
